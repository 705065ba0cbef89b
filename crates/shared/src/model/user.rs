use serde::{Deserialize, Serialize};

/// The signed in supervisor, as handed over by the host page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupervisorUser {
    pub full_name: String,
}
