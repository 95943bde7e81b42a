//! # Jotz Architecture
//!
//! Jotz is a **UI-agnostic, session-scoped note library**. The terminal shell
//! shipped with it is one host among possible others (a web page, a TUI); the
//! library itself never touches stdout or the terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Shell loop: one line in, one action, one full re-render  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session registry                                │
//! │  - Parses display indexes ("3", "f1")                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (store.rs, edit.rs, session.rs, view.rs, uploads.rs)  │
//! │  - NoteStore: ordered notes + single-slot edit state        │
//! │  - Frame: the render model drawn after every action         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State lives in sessions
//!
//! Everything a user does happens inside a [`session::Session`]. Sessions are
//! held in memory by the host and disappear with it; nothing is persisted
//! except the user's configuration.
//!
//! ## Positional identity
//!
//! Notes are addressed by position. A host must re-render after each action and
//! only act on indexes from the latest render. See [`index`] for the user-facing
//! numbering.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Per-operation logic and messages
//! - [`store`]: `NoteStore`, the ordered note list
//! - [`edit`]: The single edit slot
//! - [`session`]: Sessions and the registry holding them
//! - [`view`]: Frames, rows and row actions
//! - [`index`]: Display numbering (`3`, `f1`)
//! - [`uploads`]: Request-scoped file selections
//! - [`config`]: Configuration file
//! - [`model`]: `Note` and `NoteId`
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod edit;
pub mod error;
pub mod index;
pub mod model;
pub mod session;
pub mod store;
pub mod uploads;
pub mod view;
