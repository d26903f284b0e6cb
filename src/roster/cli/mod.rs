pub mod commands;
pub mod logging;
pub mod prompt;
pub mod render;
pub mod setup;
pub mod styles;
