//! Test generation stage. The reply is used verbatim.

use async_trait::async_trait;
use codegen_core::{CodeResult, PipelineStage, TestResult};
use llm::Inference;
use tracing::{debug, info};

use crate::core::Stage;
use crate::prompts::StagePrompts;

pub struct TestingStage;

impl TestingStage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TestingStage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Stage for TestingStage {
    type Input = CodeResult;
    type Output = TestResult;

    fn stage(&self) -> PipelineStage {
        PipelineStage::Testing
    }

    async fn process(&self, llm: &dyn Inference, code: &CodeResult) -> TestResult {
        let system = StagePrompts::tester_system(code.language);
        let prompt = StagePrompts::test_request(code);
        debug!(language = %code.language, "Requesting tests");

        let test_code = llm.call(&prompt, &system).await;
        info!(test_length = test_code.len(), "Tests generated");

        TestResult {
            test_code,
            language: code.language,
            description: format!("Tests for {}", code.description),
        }
    }
}
