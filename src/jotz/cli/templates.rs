//! # Shell Templates
//!
//! Output is rendered from minijinja templates kept in `templates/`, included
//! here as string constants. Layout math (widths, truncation, padding) is done
//! in Rust before data reaches a template; templates only pick structure and
//! styles.
//!
//! The environment runs with `trim_blocks` and `lstrip_blocks`, so a line that
//! holds only a block tag produces no output. Every template keeps its trailing
//! newline; included rows therefore end their own lines.

pub const FRAME_TEMPLATE: &str = include_str!("templates/frame.tmp");
pub const ROW_TEMPLATE: &str = include_str!("templates/row.tmp");
pub const FILES_TEMPLATE: &str = include_str!("templates/files.tmp");
pub const SESSIONS_TEMPLATE: &str = include_str!("templates/sessions.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");

/// `(name, source)` of every template, registered together so they can include
/// one another.
pub const ALL: &[(&str, &str)] = &[
    ("frame", FRAME_TEMPLATE),
    ("row", ROW_TEMPLATE),
    ("files", FILES_TEMPLATE),
    ("sessions", SESSIONS_TEMPLATE),
    ("config", CONFIG_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
];
