use tracing::instrument;

use crate::{
    api::{error::FrontendError, unpublished_as_none, Supervisor, SupervisorApi},
    model::{AttendanceRecord, Report, Session, SessionId},
    utils::fetch::json_get,
};

/// [SupervisorApi] over the browser fetch api
#[derive(Debug, Clone)]
pub struct HttpSupervisorApi {
    base: String,
}

impl HttpSupervisorApi {
    pub fn new<S: Into<String>>(base: S) -> Self {
        Self { base: base.into() }
    }
}

impl SupervisorApi for HttpSupervisorApi {
    #[instrument(skip(self))]
    async fn my_sessions(&self) -> Result<Vec<Session>, FrontendError> {
        json_get(&Supervisor::Sessions.url(&self.base, None)).await
    }

    #[instrument(skip(self))]
    async fn session_attendance(
        &self,
        id: &SessionId,
    ) -> Result<Vec<AttendanceRecord>, FrontendError> {
        json_get(&Supervisor::Attendance.url(&self.base, Some(id))).await
    }

    #[instrument(skip(self))]
    async fn session_report(&self, id: &SessionId) -> Result<Option<Report>, FrontendError> {
        unpublished_as_none(json_get(&Supervisor::SessionReport.url(&self.base, Some(id))).await)
    }
}
