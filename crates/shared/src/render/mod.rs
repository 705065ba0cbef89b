//! What each dashboard panel shows, derived from [DashboardState] alone

use crate::{
    format,
    model::{AttendanceRecord, AttendanceStatus, Report, Session},
    state::{DashboardState, Slot},
};

pub mod markdown;

pub const LOADING: &str = "Loading...";
pub const NO_SESSIONS: &str = "No sessions assigned";
pub const SELECT_FOR_ATTENDANCE: &str = "Select a session to view attendance";
pub const NO_ATTENDANCE: &str = "No attendance records yet";
pub const SELECT_FOR_REPORT: &str = "Select a session to view report";
pub const REPORT_NOT_PUBLISHED: &str = "Report not yet published by coordinator";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Sessions,
    Attendance,
    Reports,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Sessions, Tab::Attendance, Tab::Reports];

    pub const fn label(self) -> &'static str {
        match self {
            Tab::Sessions => "Training Sessions",
            Tab::Attendance => "Attendance",
            Tab::Reports => "Training Reports",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionCard {
    pub session: Session,
    pub start_date: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionsPanel {
    Loading,
    Empty,
    Cards(Vec<SessionCard>),
}

impl SessionsPanel {
    pub fn from_state(state: &DashboardState) -> Self {
        if matches!(state.sessions, Slot::NotRequested | Slot::Loading) {
            return SessionsPanel::Loading;
        }
        match state.sessions.items() {
            [] => SessionsPanel::Empty,
            sessions => SessionsPanel::Cards(
                sessions
                    .iter()
                    .map(|s| SessionCard {
                        session: s.clone(),
                        start_date: format::date(&s.start_date),
                        selected: state.is_selected(&s.id),
                    })
                    .collect(),
            ),
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            SessionsPanel::Loading => Some(LOADING),
            SessionsPanel::Empty => Some(NO_SESSIONS),
            SessionsPanel::Cards(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRow {
    pub participant_name: String,
    pub participant_email: String,
    pub clock_in: String,
    pub clock_out: String,
    pub status: AttendanceStatus,
}

impl From<&AttendanceRecord> for AttendanceRow {
    fn from(r: &AttendanceRecord) -> Self {
        Self {
            participant_name: r.participant_name.clone(),
            participant_email: r.participant_email.clone(),
            clock_in: format::optional_date_time(r.clock_in_time.as_deref()),
            clock_out: format::optional_date_time(r.clock_out_time.as_deref()),
            status: r.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttendancePanel {
    NothingSelected,
    Loading,
    /// Also shown when the request failed
    Empty,
    Rows(Vec<AttendanceRow>),
}

impl AttendancePanel {
    pub fn from_state(state: &DashboardState) -> Self {
        if state.selected.is_none() {
            return AttendancePanel::NothingSelected;
        }
        match &state.attendance {
            Slot::NotRequested | Slot::Loading => AttendancePanel::Loading,
            Slot::Loaded(records) if !records.is_empty() => {
                AttendancePanel::Rows(records.iter().map(AttendanceRow::from).collect())
            }
            _ => AttendancePanel::Empty,
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            AttendancePanel::NothingSelected => Some(SELECT_FOR_ATTENDANCE),
            AttendancePanel::Loading => Some(LOADING),
            AttendancePanel::Empty => Some(NO_ATTENDANCE),
            AttendancePanel::Rows(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportPanel {
    NothingSelected,
    Loading,
    /// Unpublished, or the request failed
    NotPublished,
    Published { published_at: String, html: String },
}

impl ReportPanel {
    pub fn from_state(state: &DashboardState) -> Self {
        if state.selected.is_none() {
            return ReportPanel::NothingSelected;
        }
        match &state.report {
            Slot::NotRequested | Slot::Loading => ReportPanel::Loading,
            Slot::Loaded(Report { published_at, content }) => ReportPanel::Published {
                published_at: format::date_time(published_at),
                html: markdown::to_html(content),
            },
            Slot::Empty | Slot::Failed(_) => ReportPanel::NotPublished,
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ReportPanel::NothingSelected => Some(SELECT_FOR_REPORT),
            ReportPanel::Loading => Some(LOADING),
            ReportPanel::NotPublished => Some(REPORT_NOT_PUBLISHED),
            ReportPanel::Published { .. } => None,
        }
    }
}

/// Card description above the attendance table
pub fn attendance_description(state: &DashboardState) -> String {
    match &state.selected {
        Some(s) => format!("Attendance for {}", s.name),
        None => SELECT_FOR_ATTENDANCE.to_string(),
    }
}

/// Card description above the report
pub fn report_description(state: &DashboardState) -> String {
    match &state.selected {
        Some(s) => format!("Report for {}", s.name),
        None => SELECT_FOR_REPORT.to_string(),
    }
}
