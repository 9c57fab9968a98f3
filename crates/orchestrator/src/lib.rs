pub mod core;
pub mod error;
pub mod files;
pub mod language;
pub mod message_parser;
pub mod phases;
pub mod pipeline;
pub mod prompts;
pub mod state_machine;

pub use error::{OrchestratorError, Result};
pub use files::{FileManager, ResultPaths};
pub use pipeline::{CompletedRun, Pipeline, PipelineRun};
pub use state_machine::PipelineStateMachine;
