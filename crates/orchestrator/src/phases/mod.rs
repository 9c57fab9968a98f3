//! Stage implementations, in pipeline order:
//!
//! - [`PlanningStage`] - Breaks the goal into tasks
//! - [`CodingStage`] - Generates code for the goal and tasks
//! - [`ReviewStage`] - Critiques the generated code
//! - [`TestingStage`] - Generates unit tests for the code

mod coding;
mod planning;
mod review;
mod testing;

pub use coding::{CodeRequest, CodingStage};
pub use planning::PlanningStage;
pub use review::ReviewStage;
pub use testing::TestingStage;
