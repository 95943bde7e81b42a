//! # Rendering Module
//!
//! Turns frames, file lists and messages into terminal text through the
//! templates in [`super::templates`], styling them with the theme in
//! [`super::styles`].
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they
//! need Unicode-aware processing. Templates handle presentation: section
//! order, empty states, and which style each piece gets.

use super::styles::{self, names};
use super::templates;
use chrono::{DateTime, Utc};
use jotz::api::{CmdMessage, MessageLevel};
use jotz::config::JotzConfig;
use jotz::uploads::FileEntry;
use jotz::view::{ActionKind, Frame, NoteRow, RowAction, EMPTY_FAVORITES, EMPTY_NOTES};
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;
use uuid::Uuid;

pub const LINE_WIDTH: usize = 80;
pub const TIME_WIDTH: usize = 14;
pub const FAVORITE_MARKER: &str = "★";
pub const EDIT_MARKER: &str = "✎";
const ACTION_SEPARATOR: &str = " · ";
const DIVIDER_CHAR: &str = "─";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub use_color: bool,
    pub show_timestamps: bool,
}

/// One row, laid out. Flags drive template branching; strings are final.
#[derive(Serialize)]
struct RowData {
    editing: bool,
    marker: String,
    number: String,
    index_style: &'static str,
    text: String,
    padding: String,
    time_ago: String,
    buffer: String,
    actions_pad: String,
    actions: String,
}

#[derive(Serialize)]
struct FrameData {
    favorites: Vec<RowData>,
    notes: Vec<RowData>,
    empty_favorites: &'static str,
    empty_notes: &'static str,
    divider: String,
}

#[derive(Serialize)]
struct FileLine {
    number: usize,
    name: String,
    size: String,
    action: String,
}

#[derive(Serialize)]
struct FilesData {
    files: Vec<FileLine>,
}

/// Listing entry for one open session.
#[derive(Serialize)]
pub struct SessionLine {
    pub number: usize,
    pub id: Uuid,
    pub notes: String,
    pub age: String,
    pub active: bool,
}

#[derive(Serialize)]
struct SessionsData {
    sessions: Vec<SessionLine>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn environment(use_color: bool) -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        styles::apply(&name, &value.to_string(), use_color)
    });
    for &(name, source) in templates::ALL {
        env.add_template(name, source)?;
    }
    Ok(env)
}

fn render_template<T: Serialize>(
    name: &str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let env = environment(use_color)?;
    env.get_template(name)?.render(data)
}

/// Renders the favorites section, a divider and the full list.
pub fn render_frame(frame: &Frame, opts: RenderOptions) -> String {
    let data = FrameData {
        favorites: frame.favorites.iter().map(|r| row_data(r, opts)).collect(),
        notes: frame.notes.iter().map(|r| row_data(r, opts)).collect(),
        empty_favorites: EMPTY_FAVORITES,
        empty_notes: EMPTY_NOTES,
        divider: DIVIDER_CHAR.repeat(LINE_WIDTH),
    };
    render_template("frame", &data, opts.use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn row_data(row: &NoteRow, opts: RenderOptions) -> RowData {
    match row {
        NoteRow::Editing {
            number,
            buffer,
            actions,
            ..
        } => {
            let number = format!("{}.", number);
            RowData {
                editing: true,
                marker: EDIT_MARKER.to_string(),
                actions_pad: actions_pad(&number),
                number,
                index_style: names::INDEX,
                text: String::new(),
                padding: String::new(),
                time_ago: String::new(),
                buffer: buffer.clone(),
                actions: format_actions(actions, true),
            }
        }
        NoteRow::Display {
            number,
            text,
            favorite,
            created_at,
            actions,
            ..
        } => {
            let number = format!("{}.", number);
            let time_width = if opts.show_timestamps { TIME_WIDTH } else { 0 };
            // "  " + marker + " " + number + " " ... + "  " + time
            let fixed = 2 + 1 + 1 + number.width() + 1 + 2 + time_width;
            let available = LINE_WIDTH.saturating_sub(fixed);

            let first_line = text.lines().next().unwrap_or_default();
            let title = if first_line.len() < text.len() {
                truncate_to_width(&format!("{}…", first_line), available)
            } else {
                truncate_to_width(first_line, available)
            };
            let time_ago = if opts.show_timestamps {
                format!("  {}", format_time_ago(*created_at))
            } else {
                String::new()
            };

            RowData {
                editing: false,
                marker: (if *favorite { FAVORITE_MARKER } else { " " }).to_string(),
                actions_pad: actions_pad(&number),
                number,
                index_style: if *favorite {
                    names::INDEX_FAVORITE
                } else {
                    names::INDEX
                },
                padding: if opts.show_timestamps {
                    " ".repeat(available.saturating_sub(title.width()))
                } else {
                    String::new()
                },
                text: title,
                time_ago,
                buffer: String::new(),
                actions: format_actions(actions, *favorite),
            }
        }
    }
}

/// Aligns the action line under the note text.
fn actions_pad(number: &str) -> String {
    " ".repeat(2 + 1 + 1 + number.width() + 1)
}

/// Action hints as shell commands. `favorite` picks the toggle's wording.
fn format_actions(actions: &[RowAction], favorite: bool) -> String {
    actions
        .iter()
        .map(|a| {
            let n = a.index + 1;
            match a.kind {
                ActionKind::Delete => format!("rm {}", n),
                ActionKind::ToggleFavorite if favorite => format!("unfav {}", n),
                ActionKind::ToggleFavorite => format!("fav {}", n),
                ActionKind::StartEdit => format!("edit {}", n),
                ActionKind::SaveEdit => "set <text> · save".to_string(),
                ActionKind::CancelEdit => "cancel".to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(ACTION_SEPARATOR)
}

pub fn render_files(files: &[FileEntry], use_color: bool) -> String {
    let data = FilesData {
        files: files
            .iter()
            .map(|f| FileLine {
                number: f.number,
                name: f.name.clone(),
                size: format_size(f.size),
                action: format!("download {}", f.number),
            })
            .collect(),
    };
    render_template("files", &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_sessions(sessions: Vec<SessionLine>, use_color: bool) -> String {
    render_template("sessions", &SessionsData { sessions }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_config(config: &JotzConfig, use_color: bool) -> String {
    let data = ConfigData {
        entries: config
            .entries()
            .into_iter()
            .map(|(key, value)| ConfigEntry { key, value })
            .collect(),
    };
    render_template("config", &data, use_color).unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template("messages", &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

pub fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
