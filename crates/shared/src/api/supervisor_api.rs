use std::future::Future;

use crate::{
    api::error::FrontendError,
    model::{AttendanceRecord, Report, Session, SessionId},
};

/// The read-only backend surface the dashboard needs
///
/// Passed into [crate::dashboard::Dashboard] at construction. The browser
/// implementation is [crate::api::HttpSupervisorApi]; tests provide scripted
/// ones
pub trait SupervisorApi {
    fn my_sessions(&self) -> impl Future<Output = Result<Vec<Session>, FrontendError>>;

    fn session_attendance(
        &self,
        id: &SessionId,
    ) -> impl Future<Output = Result<Vec<AttendanceRecord>, FrontendError>>;

    /// `Ok(None)` when the server reports the report isn't published
    fn session_report(
        &self,
        id: &SessionId,
    ) -> impl Future<Output = Result<Option<Report>, FrontendError>>;
}

/// A 404 from the report endpoint means the coordinator hasn't published yet
pub fn unpublished_as_none(
    result: Result<Option<Report>, FrontendError>,
) -> Result<Option<Report>, FrontendError> {
    match result {
        Err(e) if e.is_not_found() => Ok(None),
        r => r,
    }
}
