//! Stage trait shared by the four pipeline steps.
//!
//! A stage turns one input into one output with a single inference call.
//! Stages never fail: transport errors arrive as text from [`Inference`] and
//! unparsable responses are replaced by the stage's fallback value.

use async_trait::async_trait;
use codegen_core::PipelineStage;
use llm::Inference;

#[async_trait]
pub trait Stage: Send + Sync {
    type Input: ?Sized + Sync;
    type Output: Send;

    /// Pipeline state in which this stage runs.
    fn stage(&self) -> PipelineStage;

    /// Build the request, make one call and shape the response.
    async fn process(&self, llm: &dyn Inference, input: &Self::Input) -> Self::Output;
}
