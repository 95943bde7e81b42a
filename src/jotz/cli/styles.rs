use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Shown in front of text whose style name has no entry, to catch template typos.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const HEADING: &str = "heading";
    pub const DIVIDER: &str = "divider";
    pub const EMPTY: &str = "empty";
    pub const INDEX: &str = "index";
    pub const INDEX_FAVORITE: &str = "index_favorite";
    pub const FAVORITE_MARKER: &str = "favorite_marker";
    pub const EDIT_MARKER: &str = "edit_marker";
    pub const BUFFER: &str = "buffer";
    pub const TIME: &str = "time";
    pub const ACTIONS: &str = "actions";
    pub const ACTIVE: &str = "active";
    pub const CONFIG_KEY: &str = "config_key";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static JOTZ_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        (names::HEADING, Style::new().bold().underlined()),
        (names::DIVIDER, Style::new().dim()),
        (names::EMPTY, Style::new().dim().italic()),
        (names::INDEX, Style::new()),
        (names::INDEX_FAVORITE, Style::new().yellow()),
        (names::FAVORITE_MARKER, Style::new().yellow()),
        (names::EDIT_MARKER, Style::new().cyan()),
        (names::BUFFER, Style::new().cyan().bold()),
        (names::TIME, Style::new().color256(246).italic()),
        (names::ACTIONS, Style::new().dim()),
        (names::ACTIVE, Style::new().green()),
        (names::CONFIG_KEY, Style::new().bold()),
        (names::INFO, Style::new().dim()),
        (names::SUCCESS, Style::new().green()),
        (names::WARNING, Style::new().yellow()),
        (names::ERROR, Style::new().red()),
    ])
});

/// Applies a named style. With color off the text is returned untouched,
/// except for unknown names which are flagged either way.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match JOTZ_THEME.get(name) {
        Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
        Some(_) => text.to_string(),
        None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
    }
}
