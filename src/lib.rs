pub mod commands;
pub mod completions;
pub mod plan;
pub mod render;
