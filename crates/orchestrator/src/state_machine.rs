use codegen_core::PipelineStage;

use crate::error::{OrchestratorError, Result};

/// Transition rules for a pipeline run.
///
/// The pipeline only moves forward and every edge is unconditional: no stage
/// output (not even a rejected review) can stop or rewind a run.
pub struct PipelineStateMachine;

impl PipelineStateMachine {
    pub fn validate_transition(from: &PipelineStage, to: &PipelineStage) -> Result<()> {
        if Self::next_stage(from).as_ref() == Some(to) {
            Ok(())
        } else {
            Err(OrchestratorError::InvalidTransition {
                from: *from,
                to: *to,
            })
        }
    }

    pub fn can_transition(from: &PipelineStage, to: &PipelineStage) -> bool {
        Self::validate_transition(from, to).is_ok()
    }

    pub fn next_stage(current: &PipelineStage) -> Option<PipelineStage> {
        match current {
            PipelineStage::Planning => Some(PipelineStage::Coding),
            PipelineStage::Coding => Some(PipelineStage::Reviewing),
            PipelineStage::Reviewing => Some(PipelineStage::Testing),
            PipelineStage::Testing => Some(PipelineStage::Done),
            PipelineStage::Done => None,
        }
    }
}
