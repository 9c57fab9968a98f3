use serde::{Deserialize, Serialize};

/// Structured critique returned by the review stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    /// Quality score, nominally 1-10
    pub score: u8,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    pub approved: bool,
}

impl Review {
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}
