use crate::{
    model::{AttendanceRecord, Report, Session, SessionId},
    state::Slot,
};

/// Issued by [DashboardState::select], scopes the loads for one selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
    session_id: SessionId,
}

impl SelectionTicket {
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Whether a finished load was written into the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Yes,
    /// The selection changed while the request was in flight
    Stale,
}

/// Everything the dashboard renders from
///
/// Attendance and report always belong to `selected`. Each selection bumps a
/// generation counter and results carrying an older ticket are dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub sessions: Slot<Vec<Session>>,
    /// The list shown before a reload started, restored if the reload fails
    previous_sessions: Option<Vec<Session>>,
    pub selected: Option<Session>,
    pub attendance: Slot<Vec<AttendanceRecord>>,
    pub report: Slot<Report>,
    generation: u64,
}

impl DashboardState {
    /// True while the session list request is in flight
    pub fn loading(&self) -> bool {
        self.sessions.is_loading()
    }

    pub fn begin_sessions_load(&mut self) {
        if let Slot::Loaded(sessions) = std::mem::replace(&mut self.sessions, Slot::Loading) {
            self.previous_sessions = Some(sessions);
        }
    }

    /// A failure keeps a previously loaded list
    pub fn finish_sessions_load(&mut self, result: Result<Vec<Session>, String>) {
        let previous = self.previous_sessions.take();
        self.sessions = match (result, previous) {
            (Ok(sessions), _) => Slot::from_list(sessions),
            (Err(_), Some(previous)) => Slot::Loaded(previous),
            (Err(reason), None) => Slot::Failed(reason),
        };
    }

    /// Select `session` and invalidate the data of the previous selection
    pub fn select(&mut self, session: Session) -> SelectionTicket {
        self.generation += 1;
        let ticket = SelectionTicket { generation: self.generation, session_id: session.id.clone() };

        self.selected = Some(session);
        self.attendance = Slot::Loading;
        self.report = Slot::Loading;

        ticket
    }

    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        ticket.generation == self.generation
    }

    pub fn is_selected(&self, id: &SessionId) -> bool {
        self.selected.as_ref().map_or(false, |s| &s.id == id)
    }

    pub fn apply_attendance(
        &mut self,
        ticket: &SelectionTicket,
        result: Result<Vec<AttendanceRecord>, String>,
    ) -> Applied {
        if !self.is_current(ticket) {
            return Applied::Stale;
        }
        self.attendance = match result {
            Ok(records) => Slot::from_list(records),
            Err(reason) => Slot::Failed(reason),
        };
        Applied::Yes
    }

    pub fn apply_report(
        &mut self,
        ticket: &SelectionTicket,
        result: Result<Option<Report>, String>,
    ) -> Applied {
        if !self.is_current(ticket) {
            return Applied::Stale;
        }
        self.report = match result {
            Ok(report) => Slot::from_option(report),
            Err(reason) => Slot::Failed(reason),
        };
        Applied::Yes
    }
}
