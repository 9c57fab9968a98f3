//! Domain types for the code-generation pipeline.
//!
//! Every stage of the pipeline exchanges plain data: the planner produces
//! [`Task`]s, the code stage a [`CodeResult`], the review stage a [`Review`]
//! and the test stage a [`TestResult`]. The orchestrator folds them into a
//! [`PipelineResult`].

pub mod domain;

pub use domain::artifact::{CodeResult, Language, TestResult};
pub use domain::pipeline::{PipelineResult, PipelineStage};
pub use domain::review::Review;
pub use domain::task::{Priority, Task};
