//! Worker thread that owns the async runtime and the query pipeline.

pub mod commands;
pub mod runtime;
