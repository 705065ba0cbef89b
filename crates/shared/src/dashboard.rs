//! Data loading for the supervisor dashboard
//!
//! [Dashboard] owns the injected [SupervisorApi] and writes results into a
//! [StateCell]. Failures never escape: they are logged and turned into
//! [Notice]s.

use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::{
    api::SupervisorApi,
    model::Session,
    notice::{Notice, NoticeSink},
    state::{Applied, DashboardState, SelectionTicket, StateCell},
};

pub const SESSIONS_FAILED: &str = "Failed to load sessions";
pub const ATTENDANCE_FAILED: &str = "Failed to load attendance";
pub const REPORT_UNAVAILABLE: &str = "No published report available yet";

pub struct Dashboard<A, S, N> {
    api: Rc<A>,
    state: S,
    notices: N,
}

impl<A, S: Clone, N: Clone> Clone for Dashboard<A, S, N> {
    fn clone(&self) -> Self {
        Self { api: self.api.clone(), state: self.state.clone(), notices: self.notices.clone() }
    }
}

impl<A, S, N> Dashboard<A, S, N>
where
    A: SupervisorApi + 'static,
    S: StateCell,
    N: NoticeSink,
{
    pub fn new(api: A, state: S, notices: N) -> Self {
        Self { api: Rc::new(api), state, notices }
    }

    /// Runs once when the view is first shown
    pub async fn mount(&self) {
        self.load_sessions().await
    }

    pub async fn load_sessions(&self) {
        if self.state.modify(DashboardState::begin_sessions_load).is_none() {
            return;
        }

        let result = self.api.my_sessions().await.map_err(|e| {
            warn!("Loading sessions failed: {e}");
            self.notices.notify(Notice::error(SESSIONS_FAILED));
            e.to_string()
        });
        if let Ok(sessions) = &result {
            info!(count = sessions.len(), "Loaded sessions");
        }

        self.state.modify(|s| s.finish_sessions_load(result));
    }

    /// Select `session` then load its attendance and report side by side
    ///
    /// Each load is applied as soon as it finishes. Results that arrive after
    /// another selection has been made are dropped
    pub async fn select(&self, session: Session) {
        debug!("Selecting session {}", session.id);
        let Some(ticket) = self.state.modify(|s| s.select(session)) else {
            return;
        };

        futures::join!(self.load_attendance(&ticket), self.load_report(&ticket));
    }

    async fn load_attendance(&self, ticket: &SelectionTicket) {
        let id = ticket.session_id();
        let result = self.api.session_attendance(id).await.map_err(|e| e.to_string());
        let outcome = result.as_ref().map(Vec::len).map_err(String::clone);

        match self.state.modify(|s| s.apply_attendance(ticket, result)) {
            Some(Applied::Yes) => match outcome {
                Ok(count) => info!(count, "Loaded attendance for session {id}"),
                Err(e) => {
                    warn!("Loading attendance for session {id} failed: {e}");
                    self.notices.notify(Notice::error(ATTENDANCE_FAILED));
                }
            },
            _ => debug!(failed = outcome.is_err(), "Dropping stale attendance for session {id}"),
        }
    }

    async fn load_report(&self, ticket: &SelectionTicket) {
        let id = ticket.session_id();
        let result = self.api.session_report(id).await.map_err(|e| e.to_string());
        let outcome = result.as_ref().map(Option::is_some).map_err(String::clone);

        match self.state.modify(|s| s.apply_report(ticket, result)) {
            Some(Applied::Yes) => match outcome {
                Ok(true) => info!("Loaded report for session {id}"),
                Ok(false) => {
                    debug!("Report for session {id} isn't published");
                    self.notices.notify(Notice::info(REPORT_UNAVAILABLE));
                }
                Err(e) => {
                    warn!("Loading report for session {id} failed: {e}");
                    self.notices.notify(Notice::info(REPORT_UNAVAILABLE));
                }
            },
            _ => debug!("Dropping stale report for session {id}"),
        }
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, collections::HashMap};

    use futures::channel::oneshot;
    use http::StatusCode;
    use tokio_test::block_on;

    use super::*;
    use crate::{
        api::{error::FrontendError, unpublished_as_none},
        model::{AttendanceRecord, Report, SessionId},
        notice::NoticeLevel,
        render::{AttendancePanel, ReportPanel, SessionsPanel},
        state::Slot,
    };

    type Calls = Rc<RefCell<Vec<String>>>;
    type Notices = Rc<RefCell<Vec<Notice>>>;
    type State = Rc<RefCell<DashboardState>>;

    fn session(id: u64, name: &str) -> Session {
        Session {
            id: id.into(),
            name: name.into(),
            location: "HQ".into(),
            start_date: "2024-01-10".into(),
        }
    }

    fn record(name: &str, clock_out: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            participant_name: name.into(),
            participant_email: format!("{name}@example.com"),
            clock_in_time: Some("2024-01-10T09:00:00Z".into()),
            clock_out_time: clock_out.map(Into::into),
        }
    }

    fn not_found() -> FrontendError {
        FrontendError::Status { code: StatusCode::NOT_FOUND, body: "Not Found".into() }
    }

    fn offline() -> FrontendError {
        FrontendError::Client { message: "offline".into() }
    }

    /// Answers every request from a fixed script and records what was asked
    #[derive(Default)]
    struct ScriptedApi {
        calls: Calls,
        sessions: Option<Result<Vec<Session>, FrontendError>>,
        attendance: HashMap<SessionId, Result<Vec<AttendanceRecord>, FrontendError>>,
        reports: HashMap<SessionId, Result<Option<Report>, FrontendError>>,
    }

    impl SupervisorApi for ScriptedApi {
        async fn my_sessions(&self) -> Result<Vec<Session>, FrontendError> {
            self.calls.borrow_mut().push("sessions".into());
            self.sessions.clone().unwrap_or_else(|| Err(offline()))
        }

        async fn session_attendance(
            &self,
            id: &SessionId,
        ) -> Result<Vec<AttendanceRecord>, FrontendError> {
            self.calls.borrow_mut().push(format!("attendance/{id}"));
            self.attendance.get(id).cloned().unwrap_or_else(|| Err(offline()))
        }

        async fn session_report(&self, id: &SessionId) -> Result<Option<Report>, FrontendError> {
            self.calls.borrow_mut().push(format!("report/{id}"));
            let scripted = self.reports.get(id).cloned().unwrap_or_else(|| Err(not_found()));
            unpublished_as_none(scripted)
        }
    }

    /// Holds each response until the test releases it
    #[derive(Default)]
    struct GatedApi {
        attendance: RefCell<HashMap<SessionId, oneshot::Receiver<Vec<AttendanceRecord>>>>,
        reports: RefCell<HashMap<SessionId, oneshot::Receiver<Report>>>,
    }

    impl GatedApi {
        fn gate(
            &self,
            id: u64,
        ) -> (oneshot::Sender<Vec<AttendanceRecord>>, oneshot::Sender<Report>) {
            let (attendance_tx, attendance_rx) = oneshot::channel();
            let (report_tx, report_rx) = oneshot::channel();
            self.attendance.borrow_mut().insert(id.into(), attendance_rx);
            self.reports.borrow_mut().insert(id.into(), report_rx);
            (attendance_tx, report_tx)
        }
    }

    impl SupervisorApi for GatedApi {
        async fn my_sessions(&self) -> Result<Vec<Session>, FrontendError> {
            Ok(vec![])
        }

        async fn session_attendance(
            &self,
            id: &SessionId,
        ) -> Result<Vec<AttendanceRecord>, FrontendError> {
            let rx = self.attendance.borrow_mut().remove(id).ok_or_else(offline)?;
            rx.await.map_err(|_| offline())
        }

        async fn session_report(&self, id: &SessionId) -> Result<Option<Report>, FrontendError> {
            let rx = self.reports.borrow_mut().remove(id).ok_or_else(offline)?;
            rx.await.map(Some).map_err(|_| offline())
        }
    }

    fn dashboard<A: SupervisorApi + 'static>(api: A) -> (Dashboard<A, State, Notices>, State, Notices) {
        let state = State::default();
        let notices = Notices::default();
        (Dashboard::new(api, state.clone(), notices.clone()), state, notices)
    }

    #[test]
    fn test_mount_loads_sessions_once() {
        let calls = Calls::default();
        let api = ScriptedApi {
            calls: calls.clone(),
            sessions: Some(Ok(vec![session(1, "Fire Safety"), session(2, "First Aid")])),
            ..Default::default()
        };
        let (dash, state, notices) = dashboard(api);

        block_on(dash.mount());

        assert_eq!(*calls.borrow(), vec!["sessions".to_string()]);
        assert!(notices.borrow().is_empty());
        let state = state.borrow();
        assert!(!state.loading());
        match SessionsPanel::from_state(&state) {
            SessionsPanel::Cards(cards) => assert_eq!(cards.len(), 2),
            other => panic!("expected cards, got {other:?}"),
        }
    }

    #[test]
    fn test_mount_failure_notifies_and_renders_nothing() {
        let (dash, state, notices) = dashboard(ScriptedApi::default());

        block_on(dash.mount());

        assert_eq!(*notices.borrow(), vec![Notice::error(SESSIONS_FAILED)]);
        let state = state.borrow();
        assert!(!state.loading());
        assert!(state.sessions.items().is_empty());
        assert_eq!(SessionsPanel::from_state(&state), SessionsPanel::Empty);
    }

    #[test]
    fn test_select_requests_attendance_and_report_for_session() {
        let calls = Calls::default();
        let api = ScriptedApi {
            calls: calls.clone(),
            attendance: HashMap::from([
                (SessionId::from(1u64), Ok(vec![record("ann", None)])),
                (SessionId::from(2u64), Ok(vec![])),
            ]),
            ..Default::default()
        };
        let (dash, _, _) = dashboard(api);

        block_on(dash.select(session(1, "Fire Safety")));
        block_on(dash.select(session(2, "First Aid")));
        block_on(dash.select(session(1, "Fire Safety")));

        assert_eq!(
            *calls.borrow(),
            vec!["attendance/1", "report/1", "attendance/2", "report/2", "attendance/1", "report/1"]
        );
    }

    #[test]
    fn test_empty_attendance_scenario() {
        let api = ScriptedApi {
            attendance: HashMap::from([(SessionId::from(1u64), Ok(vec![]))]),
            ..Default::default()
        };
        let (dash, state, _) = dashboard(api);

        block_on(dash.select(session(1, "Fire Safety")));

        assert_eq!(AttendancePanel::from_state(&state.borrow()), AttendancePanel::Empty);
    }

    #[test]
    fn test_unpublished_report_scenario() {
        let api = ScriptedApi {
            attendance: HashMap::from([(SessionId::from(1u64), Ok(vec![]))]),
            ..Default::default()
        };
        let (dash, state, notices) = dashboard(api);

        block_on(dash.select(session(1, "Fire Safety")));

        let state = state.borrow();
        assert_eq!(state.report, Slot::Empty);
        assert_eq!(ReportPanel::from_state(&state), ReportPanel::NotPublished);
        assert_eq!(*notices.borrow(), vec![Notice::info(REPORT_UNAVAILABLE)]);
    }

    #[test]
    fn test_report_server_error_renders_as_unpublished() {
        let api = ScriptedApi {
            attendance: HashMap::from([(SessionId::from(1u64), Ok(vec![]))]),
            reports: HashMap::from([(SessionId::from(1u64), Err(offline()))]),
            ..Default::default()
        };
        let (dash, state, notices) = dashboard(api);

        block_on(dash.select(session(1, "Fire Safety")));

        let state = state.borrow();
        assert!(matches!(state.report, Slot::Failed(_)));
        assert_eq!(ReportPanel::from_state(&state), ReportPanel::NotPublished);
        assert_eq!(notices.borrow()[0].level, NoticeLevel::Info);
    }

    #[test]
    fn test_published_report_has_no_notice() {
        let report = Report {
            published_at: "2024-01-12T14:30:00Z".into(),
            content: "# Summary\n\nAll present.".into(),
        };
        let api = ScriptedApi {
            attendance: HashMap::from([(SessionId::from(1u64), Ok(vec![record("ann", Some("2024-01-10T17:00:00Z"))]))]),
            reports: HashMap::from([(SessionId::from(1u64), Ok(Some(report.clone())))]),
            ..Default::default()
        };
        let (dash, state, notices) = dashboard(api);

        block_on(dash.select(session(1, "Fire Safety")));

        assert!(notices.borrow().is_empty());
        assert_eq!(state.borrow().report, Slot::Loaded(report));
    }

    #[test]
    fn test_attendance_failure_notifies() {
        let (dash, state, notices) = dashboard(ScriptedApi::default());

        block_on(dash.select(session(1, "Fire Safety")));

        assert!(matches!(state.borrow().attendance, Slot::Failed(_)));
        assert!(notices.borrow().contains(&Notice::error(ATTENDANCE_FAILED)));
    }

    #[test]
    fn test_late_response_for_previous_selection_is_dropped() {
        let api = GatedApi::default();
        let (first_attendance, first_report) = api.gate(1);
        let (second_attendance, second_report) = api.gate(2);
        let (dash, state, notices) = dashboard(api);

        block_on(async {
            futures::join!(
                dash.select(session(1, "Fire Safety")),
                dash.select(session(2, "First Aid")),
                async {
                    // The second selection's answers land before the first's
                    second_attendance.send(vec![record("bo", None)]).unwrap();
                    second_report
                        .send(Report { published_at: "2024-02-01T10:00:00Z".into(), content: "Two".into() })
                        .unwrap();
                    first_attendance.send(vec![record("ann", None), record("cy", None)]).unwrap();
                    first_report
                        .send(Report { published_at: "2024-01-12T10:00:00Z".into(), content: "One".into() })
                        .unwrap();
                },
            )
        });

        let state = state.borrow();
        assert!(state.is_selected(&SessionId::from(2u64)));
        assert_eq!(state.attendance.items(), &[record("bo", None)]);
        assert_eq!(state.report.loaded().map(|r| r.content.as_str()), Some("Two"));
        assert!(notices.borrow().is_empty());
    }
}
