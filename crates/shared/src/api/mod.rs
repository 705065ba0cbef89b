use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::model::SessionId;

pub mod error;

mod supervisor_api;
pub use supervisor_api::*;

#[cfg(feature = "wasm")]
mod http_api;
#[cfg(feature = "wasm")]
pub use http_api::*;

pub const API_BASE_PATH: &str = "/api";

const ID_PLACEHOLDER: &str = ":id";

/// Characters escaped when an id is placed into a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Supervisor {
    Sessions,
    Attendance,
    SessionReport,
}

impl Supervisor {
    /// Path relative to the api base. Id scoped paths contain `:id`
    pub const fn path(&self) -> &str {
        use Supervisor::*;
        match self {
            Sessions => "/supervisor/sessions",
            Attendance => "/supervisor/attendance/:id",
            SessionReport => "/reports/session/:id",
        }
    }

    /// Replaces `:id` with the percent encoded session id
    pub fn id_path(&self, id: &SessionId) -> String {
        let segment = utf8_percent_encode(id.as_str(), PATH_SEGMENT).to_string();
        self.path().replace(ID_PLACEHOLDER, &segment)
    }

    /// Joins the path onto `base`, tolerating a trailing slash on the base
    pub fn url(&self, base: &str, id: Option<&SessionId>) -> String {
        let path = match id {
            Some(id) => self.id_path(id),
            None => self.path().to_string(),
        };
        format!("{}{}", base.trim_end_matches('/'), path)
    }
}
