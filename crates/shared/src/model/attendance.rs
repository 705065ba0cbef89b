use serde::{Deserialize, Serialize};

/// One participant's clock-in/clock-out pair for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub participant_name: String,
    pub participant_email: String,
    #[serde(default)]
    pub clock_in_time: Option<String>,
    #[serde(default)]
    pub clock_out_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Complete,
    InProgress,
}

impl AttendanceStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Complete => "Complete",
            AttendanceStatus::InProgress => "In Progress",
        }
    }
}

impl AttendanceRecord {
    /// A record is complete once the participant has clocked out
    pub fn status(&self) -> AttendanceStatus {
        if self.clock_out_time.is_some() {
            AttendanceStatus::Complete
        } else {
            AttendanceStatus::InProgress
        }
    }
}
