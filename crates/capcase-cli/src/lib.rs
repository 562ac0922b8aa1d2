//! CLI library components for the capital case preprocessor.

pub mod logging;
pub mod pipeline;
pub mod types;
