use serde::{Deserialize, Serialize};

use super::artifact::{CodeResult, Language, TestResult};
use super::review::Review;
use super::task::Task;

/// Position of a pipeline run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    #[default]
    Planning,
    Coding,
    Reviewing,
    Testing,
    Done,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Coding => "coding",
            Self::Reviewing => "reviewing",
            Self::Testing => "testing",
            Self::Done => "done",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "planning" => Some(Self::Planning),
            "coding" => Some(Self::Coding),
            "reviewing" => Some(Self::Reviewing),
            "testing" => Some(Self::Testing),
            "done" => Some(Self::Done),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate output of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineResult {
    pub prompt: String,
    pub tasks: Vec<Task>,
    pub code: String,
    pub language: Language,
    pub review: Review,
    pub tests: String,
    pub quality_score: u8,
    pub approved: bool,
}

impl PipelineResult {
    /// Merge the outputs of all four stages.
    pub fn assemble(
        prompt: impl Into<String>,
        tasks: Vec<Task>,
        code: CodeResult,
        review: Review,
        tests: TestResult,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            tasks,
            code: code.code,
            language: code.language,
            quality_score: review.score,
            approved: review.approved,
            review,
            tests: tests.test_code,
        }
    }

    /// Everything except the generated code and tests.
    pub fn metadata(&self) -> serde_json::Value {
        serde_json::json!({
            "prompt": self.prompt,
            "tasks": self.tasks,
            "language": self.language,
            "review": self.review,
            "quality_score": self.quality_score,
            "approved": self.approved,
        })
    }
}
