//! Planning stage.
//!
//! Asks the model for a JSON array of 3-5 tasks. When the reply does not
//! parse, a fixed two-task plan is used instead.

use async_trait::async_trait;
use codegen_core::{PipelineStage, Priority, Task};
use llm::Inference;
use tracing::{debug, info, warn};

use crate::core::Stage;
use crate::message_parser::MessageParser;
use crate::prompts::StagePrompts;

pub struct PlanningStage;

impl PlanningStage {
    pub fn new() -> Self {
        Self
    }

    /// Plan used when the model's reply is not a task list.
    pub fn fallback_tasks() -> Vec<Task> {
        vec![
            Task::new("1", "Analyze requirements", Priority::High),
            Task::new("2", "Implement solution", Priority::High),
        ]
    }
}

impl Default for PlanningStage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Stage for PlanningStage {
    type Input = str;
    type Output = Vec<Task>;

    fn stage(&self) -> PipelineStage {
        PipelineStage::Planning
    }

    async fn process(&self, llm: &dyn Inference, goal: &str) -> Vec<Task> {
        let system = StagePrompts::planner_system();
        debug!(goal_length = goal.len(), "Requesting task plan");

        let response = llm.call(goal, &system).await;

        match MessageParser::parse_task_list(&response) {
            Some(tasks) => {
                info!(task_count = tasks.len(), "Plan created");
                tasks
            }
            None => {
                warn!(
                    content_preview = %MessageParser::preview(&response),
                    "Failed to parse task plan, using fallback plan"
                );
                Self::fallback_tasks()
            }
        }
    }
}
