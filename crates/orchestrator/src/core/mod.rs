//! Core abstractions for the pipeline execution model.
//!
//! - [`Stage`] - Trait that all pipeline stages implement

mod stage;

pub use stage::Stage;
