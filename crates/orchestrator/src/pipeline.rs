//! The orchestrator: runs planning, coding, review and testing in order and
//! merges their outputs.

use std::sync::Arc;

use codegen_core::{PipelineResult, PipelineStage};
use llm::Inference;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::core::Stage;
use crate::error::Result;
use crate::message_parser::MessageParser;
use crate::phases::{CodeRequest, CodingStage, PlanningStage, ReviewStage, TestingStage};
use crate::state_machine::PipelineStateMachine;

/// State of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    id: Uuid,
    stage: PipelineStage,
}

impl PipelineRun {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            stage: PipelineStage::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn stage(&self) -> PipelineStage {
        self.stage
    }

    pub fn advance(&mut self, to: PipelineStage) -> Result<()> {
        PipelineStateMachine::validate_transition(&self.stage, &to)?;
        info!(from = %self.stage, to = %to, "Stage transition");
        self.stage = to;
        Ok(())
    }
}

impl Default for PipelineRun {
    fn default() -> Self {
        Self::new()
    }
}

/// A run that reached [`PipelineStage::Done`].
#[derive(Debug, Clone)]
pub struct CompletedRun {
    pub run_id: Uuid,
    pub stage: PipelineStage,
    pub result: PipelineResult,
}

pub struct Pipeline {
    llm: Arc<dyn Inference>,
    planner: PlanningStage,
    coder: CodingStage,
    reviewer: ReviewStage,
    tester: TestingStage,
}

impl Pipeline {
    pub fn new(llm: Arc<dyn Inference>) -> Self {
        Self {
            llm,
            planner: PlanningStage::new(),
            coder: CodingStage::new(),
            reviewer: ReviewStage::new(),
            tester: TestingStage::new(),
        }
    }

    /// Run all four stages for `prompt`.
    ///
    /// Always reaches `Done`: stage outputs never abort the run, a rejected
    /// review included.
    pub async fn execute(&self, prompt: &str) -> Result<CompletedRun> {
        let mut run = PipelineRun::new();
        let span = info_span!("pipeline", run_id = %run.id());

        let result = self.run_stages(&mut run, prompt).instrument(span).await?;

        Ok(CompletedRun {
            run_id: run.id(),
            stage: run.stage(),
            result,
        })
    }

    async fn run_stages(&self, run: &mut PipelineRun, prompt: &str) -> Result<PipelineResult> {
        let llm = self.llm.as_ref();
        info!(prompt_preview = %MessageParser::preview(prompt), "Processing goal");

        let tasks = self.planner.process(llm, prompt).await;

        run.advance(self.coder.stage())?;
        let request = CodeRequest::new(prompt, tasks.clone());
        let code = self.coder.process(llm, &request).await;

        run.advance(self.reviewer.stage())?;
        let review = self.reviewer.process(llm, &code).await;

        run.advance(self.tester.stage())?;
        let tests = self.tester.process(llm, &code).await;

        run.advance(PipelineStage::Done)?;
        let result = PipelineResult::assemble(prompt, tasks, code, review, tests);

        info!(
            language = %result.language,
            quality_score = result.quality_score,
            approved = result.approved,
            "Pipeline complete"
        );

        Ok(result)
    }

    /// Run the pipeline and return only the merged result.
    pub async fn generate_code(&self, prompt: &str) -> Result<PipelineResult> {
        Ok(self.execute(prompt).await?.result)
    }
}
