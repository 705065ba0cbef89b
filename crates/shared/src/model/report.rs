use serde::{Deserialize, Serialize};

/// Coordinator-authored document about a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub published_at: String,
    /// Markdown source
    pub content: String,
}
