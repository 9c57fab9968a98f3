use async_trait::async_trait;
use codegen_core::{CodeResult, Language, PipelineStage, Priority};
use llm::Inference;
use orchestrator::core::Stage;
use orchestrator::phases::{CodeRequest, CodingStage, PlanningStage, ReviewStage, TestingStage};

/// Returns the same text for every call.
struct Canned(&'static str);

#[async_trait]
impl Inference for Canned {
    async fn call(&self, _prompt: &str, _system_message: &str) -> String {
        self.0.to_string()
    }
}

fn python_code() -> CodeResult {
    CodeResult {
        code: "def add(a, b):\n    return a + b".to_string(),
        language: Language::Python,
        description: "add two numbers...".to_string(),
    }
}

#[tokio::test]
async fn test_planner_fallback_on_prose() {
    let tasks = PlanningStage::new()
        .process(&Canned("Sure! First, analyze. Then implement."), "add numbers")
        .await;

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].task, "Implement solution");
}

#[tokio::test]
async fn test_planner_keeps_valid_plan_of_any_length() {
    let llm = Canned(r#"[{"id": "1", "task": "Only task", "priority": "low"}]"#);
    let tasks = PlanningStage::new().process(&llm, "add numbers").await;

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].priority, Priority::Low);
}

#[tokio::test]
async fn test_code_stage_classifies_and_describes() {
    let llm = Canned("const add = (a, b) => a + b;");
    let request = CodeRequest::new("add two numbers", vec![]);

    let code = CodingStage::new().process(&llm, &request).await;

    assert_eq!(code.language, Language::Javascript);
    assert_eq!(code.code, "const add = (a, b) => a + b;");
    assert_eq!(code.description, "add two numbers...");
}

#[tokio::test]
async fn test_code_stage_defaults_to_python() {
    let llm = Canned("def add(a, b):\n    return a + b");
    let code = CodingStage::new()
        .process(&llm, &CodeRequest::new("add", vec![]))
        .await;

    assert_eq!(code.language, Language::Python);
}

#[tokio::test]
async fn test_review_fallback_on_non_json() {
    let review = ReviewStage::new()
        .process(&Canned("The code looks fine overall."), &python_code())
        .await;

    assert!(review.approved);
    assert_eq!(review.score, 7);
}

#[tokio::test]
async fn test_review_passes_through_valid_critique() {
    let llm = Canned(r#"{"score": 3, "issues": ["a", "b"], "suggestions": [], "approved": false}"#);
    let review = ReviewStage::new().process(&llm, &python_code()).await;

    assert_eq!(review.score, 3);
    assert_eq!(review.issues.len(), 2);
    assert!(!review.approved);
}

#[tokio::test]
async fn test_test_stage_returns_text_verbatim() {
    let llm = Canned("this is not valid python {{{");
    let tests = TestingStage::new().process(&llm, &python_code()).await;

    assert_eq!(tests.test_code, "this is not valid python {{{");
    assert_eq!(tests.language, Language::Python);
    assert_eq!(tests.description, "Tests for add two numbers...");
}

#[test]
fn test_stage_order() {
    assert_eq!(PlanningStage::new().stage(), PipelineStage::Planning);
    assert_eq!(CodingStage::new().stage(), PipelineStage::Coding);
    assert_eq!(ReviewStage::new().stage(), PipelineStage::Reviewing);
    assert_eq!(TestingStage::new().stage(), PipelineStage::Testing);
}
