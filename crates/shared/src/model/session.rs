use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a training session
///
/// The backend is free to send either a JSON string or a JSON integer. The
/// value is kept opaque and only ever used as a path segment or for equality
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for SessionId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for SessionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SessionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> de::Visitor<'de> for IdVisitor {
            type Value = SessionId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string or integer session id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(SessionId::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(SessionId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(SessionId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(SessionId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// A scheduled training event assigned to the supervisor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub name: String,
    pub location: String,
    /// ISO-8601 date or date-time, exactly as the server sent it
    pub start_date: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_integer_and_string_ids() {
        let from_int: Session = serde_json::from_str(
            r#"{"id":1,"name":"Fire Safety","location":"HQ","start_date":"2024-01-10"}"#,
        )
        .unwrap();
        assert_eq!(from_int.id, SessionId::from(1u64));
        assert_eq!(from_int.id.to_string(), "1");

        let from_str: Session = serde_json::from_str(
            r#"{"id":"a1b2","name":"First Aid","location":"Depot","start_date":"2024-02-01T09:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(from_str.id.as_str(), "a1b2");
    }

    #[test]
    fn test_rejects_object_id() {
        let r = serde_json::from_str::<SessionId>(r#"{"oid":1}"#);
        assert!(r.is_err());
    }
}
