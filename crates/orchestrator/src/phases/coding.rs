//! Code generation stage.

use async_trait::async_trait;
use codegen_core::{CodeResult, PipelineStage, Task};
use llm::Inference;
use tracing::{debug, info};

use crate::core::Stage;
use crate::language::detect_language;
use crate::prompts::StagePrompts;

const DESCRIPTION_CHARS: usize = 100;

/// Goal plus the planned tasks, used as context for generation.
#[derive(Debug, Clone)]
pub struct CodeRequest {
    pub goal: String,
    pub tasks: Vec<Task>,
}

impl CodeRequest {
    pub fn new(goal: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            goal: goal.into(),
            tasks,
        }
    }
}

pub struct CodingStage;

impl CodingStage {
    pub fn new() -> Self {
        Self
    }

    /// First 100 characters of the goal, always followed by `...`.
    pub fn describe(goal: &str) -> String {
        let head: String = goal.chars().take(DESCRIPTION_CHARS).collect();
        format!("{}...", head)
    }
}

impl Default for CodingStage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Stage for CodingStage {
    type Input = CodeRequest;
    type Output = CodeResult;

    fn stage(&self) -> PipelineStage {
        PipelineStage::Coding
    }

    async fn process(&self, llm: &dyn Inference, request: &CodeRequest) -> CodeResult {
        let system = StagePrompts::coder_system(&request.tasks);
        debug!(
            task_count = request.tasks.len(),
            prompt_length = system.len(),
            "Requesting code"
        );

        let code = llm.call(&request.goal, &system).await;
        let language = detect_language(&code);

        info!(language = %language, code_length = code.len(), "Code generated");

        CodeResult {
            code,
            language,
            description: Self::describe(&request.goal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coding_stage_type() {
        assert_eq!(CodingStage::new().stage(), PipelineStage::Coding);
    }

    #[test]
    fn test_describe_short_goal() {
        assert_eq!(CodingStage::describe("add numbers"), "add numbers...");
    }

    #[test]
    fn test_describe_truncates_to_100_chars() {
        let goal = "x".repeat(150);
        let description = CodingStage::describe(&goal);
        assert_eq!(description, format!("{}...", "x".repeat(100)));
    }

    #[test]
    fn test_describe_counts_chars_not_bytes() {
        let goal = "ü".repeat(120);
        assert_eq!(CodingStage::describe(&goal).chars().count(), 103);
    }
}
