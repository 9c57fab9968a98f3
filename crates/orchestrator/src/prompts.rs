use codegen_core::{CodeResult, Language, Task};

pub struct StagePrompts;

impl StagePrompts {
    pub fn planner_system() -> String {
        r#"You are a task planning expert. Break down programming requests into 3-5 specific, actionable micro-tasks.
Return as JSON array with format: [{"id": "1", "task": "description", "priority": "high/medium/low"}]"#
            .to_string()
    }

    /// Tasks rendered as a `- task` bullet list.
    pub fn task_summary(tasks: &[Task]) -> String {
        tasks
            .iter()
            .map(|t| format!("- {}", t.task))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn coder_system(tasks: &[Task]) -> String {
        format!(
            r#"You are an expert programmer. Generate clean, well-documented code based on this request.

Tasks to implement:
{task_summary}

Requirements:
- Include error handling
- Add input validation
- Use clear variable names
- Add docstrings/comments
- Return only the code, no explanations"#,
            task_summary = Self::task_summary(tasks)
        )
    }

    pub fn reviewer_system() -> String {
        r#"You are a senior code reviewer. Analyze the code for:
- Logic errors
- Security issues
- Performance problems
- Code quality issues
- Missing error handling

Return JSON format:
{
    "score": 1-10,
    "issues": ["list of issues found"],
    "suggestions": ["list of improvements"],
    "approved": true/false
}"#
        .to_string()
    }

    pub fn review_request(code: &CodeResult) -> String {
        format!("Review this {} code:\n\n{}", code.language, code.code)
    }

    pub fn tester_system(language: Language) -> String {
        format!(
            r#"You are a test automation expert. Generate comprehensive unit tests for this {language} code.

Include:
- Basic functionality tests
- Edge case tests
- Error handling tests

Return only the test code, properly formatted."#,
            language = language
        )
    }

    pub fn test_request(code: &CodeResult) -> String {
        format!("Create tests for:\n\n{}", code.code)
    }
}
