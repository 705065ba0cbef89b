use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrongContentTypeError {
    pub expected: String,
    pub got: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, Error)]
pub enum FrontendError {
    /// Network level failure, the request never produced a response
    #[error("Client error: {message}")]
    Client { message: String },
    #[error("Server responded {code}: {body}")]
    Status { code: StatusCode, body: String },
    #[error("Wrong content type: expected {}, got {:?}", inner.expected, inner.got)]
    WrongContentType { inner: WrongContentTypeError },
    #[error("Deserialize error: {message}")]
    Deserialize { message: String },

    #[error("{context}: {inner}")]
    WithContext { context: String, inner: Box<Self> },
}

impl FrontendError {
    /// The status code of the response, looking through any added context
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FrontendError::Status { code, .. } => Some(*code),
            FrontendError::WithContext { inner, .. } => inner.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl From<WrongContentTypeError> for FrontendError {
    fn from(inner: WrongContentTypeError) -> Self {
        Self::WrongContentType { inner }
    }
}

impl From<serde_json::Error> for FrontendError {
    fn from(value: serde_json::Error) -> Self {
        Self::Deserialize { message: value.to_string() }
    }
}

#[cfg(feature = "wasm")]
impl From<gloo::net::Error> for FrontendError {
    fn from(value: gloo::net::Error) -> Self {
        match value {
            gloo::net::Error::SerdeError(e) => e.into(),
            e => Self::Client { message: format!("gloo-net error: {e}") },
        }
    }
}

pub trait ErrorContext<E>: Sized {
    /// Add helpful context to errors
    ///
    /// `context` is provided as a closure to avoid potential formatting cost if
    /// the result isn't an error
    #[allow(dead_code)]
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> E;
    /// Add helpful context to errors
    fn context<S: Into<String>>(self, context: S) -> E;
}

pub trait ResultContext<T, E: ErrorContext<E>> {
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> Result<T, E>;
    fn context<S: Into<String>>(self, context: S) -> Result<T, E>;
}

impl<E: Into<FrontendError>> ErrorContext<FrontendError> for E {
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> FrontendError {
        self.context(context())
    }
    fn context<S: Into<String>>(self, context: S) -> FrontendError {
        FrontendError::WithContext { context: context.into(), inner: Box::new(self.into()) }
    }
}

impl<T, E: ErrorContext<E>> ResultContext<T, E> for Result<T, E> {
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> Result<T, E> {
        self.context(context())
    }
    fn context<S: Into<String>>(self, context: S) -> Result<T, E> {
        self.map_err(|e| e.context(context))
    }
}
