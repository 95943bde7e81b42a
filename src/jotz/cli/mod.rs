pub mod commands;
pub mod render;
pub mod setup;
pub mod shell;
pub mod styles;
pub mod templates;
