//! Chat-completion client for OpenAI-compatible inference endpoints.
//!
//! - **Client**: one non-streaming `/chat/completions` call per request
//! - **Inference**: the seam the pipeline stages talk to; failures come back
//!   as `"Error: ..."` text instead of `Err`
//! - **Config**: endpoint, model and sampling settings

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{ChatClient, Inference};
pub use config::LlmConfig;
pub use error::{LlmError, LlmResult};
pub use types::{ChatMessage, Role};
