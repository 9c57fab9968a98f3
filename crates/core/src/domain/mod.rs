pub mod artifact;
pub mod pipeline;
pub mod review;
pub mod task;
