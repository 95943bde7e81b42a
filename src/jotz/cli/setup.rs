use clap::{CommandFactory, Parser, Subcommand};
use jotz::config::ColorMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotz", bin_name = "jotz", version)]
#[command(about = "Session-scoped note pad with favorites", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// When to use colors: auto, always or never
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive shell (default)
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key (color, download-dir, show-timestamps)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// One line typed into the shell.
#[derive(Parser, Debug)]
#[command(
    name = "jotz",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub action: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    #[command(flatten)]
    Note(NoteActions),

    #[command(flatten)]
    Edit(EditActions),

    #[command(flatten)]
    Files(FileActions),

    #[command(flatten)]
    Misc(MiscActions),
}

#[derive(Subcommand, Debug)]
pub enum NoteActions {
    /// Add a note
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Note text (the rest of the line, spacing kept)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete one or more notes
    #[command(alias = "rm", display_order = 2)]
    Delete {
        /// Indexes of the notes (e.g. 1 3 f1)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Toggle favorite on one or more notes
    #[command(aliases = ["unfav", "favorite"], display_order = 3)]
    Fav {
        /// Indexes of the notes (e.g. 1 3 f1)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Show the notes again
    #[command(alias = "ls", display_order = 4)]
    List {
        /// Print the frame as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum EditActions {
    /// Start editing a note
    #[command(alias = "e", display_order = 10)]
    Edit {
        /// Index of the note (e.g. 2 or f1)
        index: String,
    },

    /// Replace the edit buffer
    #[command(display_order = 11)]
    Set {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Save the edit (optionally setting the buffer first)
    #[command(display_order = 12)]
    Save {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Leave edit mode without saving
    #[command(display_order = 13)]
    Cancel,
}

#[derive(Subcommand, Debug)]
pub enum FileActions {
    /// Select files to list (replaces the previous selection)
    #[command(display_order = 20)]
    Upload {
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// List the selected files
    #[command(display_order = 21)]
    Files,

    /// Write a selected file back out unchanged
    #[command(display_order = 22)]
    Download {
        /// File number from the list
        number: usize,

        /// Destination file or directory (defaults to download-dir)
        dest: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscActions {
    /// Manage sessions
    #[command(display_order = 30)]
    Session {
        #[command(subcommand)]
        action: Option<SessionAction>,
    },

    /// Print help for the shell or one action
    #[command(display_order = 31)]
    Help {
        command: Option<String>,
    },

    /// Leave the shell
    #[command(aliases = ["exit", "q"], display_order = 32)]
    Quit,
}

#[derive(Subcommand, Debug)]
pub enum SessionAction {
    /// Open a new empty session and switch to it
    New,
    /// List open sessions
    List,
    /// Switch to session NUMBER
    Use { number: usize },
    /// Close the current session
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionGroup {
    Notes,
    Edit,
    Files,
    Misc,
}

impl ActionGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            ActionGroup::Notes => "Notes:",
            ActionGroup::Edit => "Editing:",
            ActionGroup::Files => "Files:",
            ActionGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_action(name: &str) -> Option<Self> {
        match name {
            "add" | "delete" | "fav" | "list" => Some(ActionGroup::Notes),
            "edit" | "set" | "save" | "cancel" => Some(ActionGroup::Edit),
            "upload" | "files" | "download" => Some(ActionGroup::Files),
            "session" | "help" | "quit" => Some(ActionGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [ActionGroup] {
        &[
            ActionGroup::Notes,
            ActionGroup::Edit,
            ActionGroup::Files,
            ActionGroup::Misc,
        ]
    }
}

/// Grouped overview of every shell action.
pub fn get_grouped_help() -> String {
    let cmd = ShellLine::command();
    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    let mut output = String::new();
    output.push_str("Indexes are the numbers shown next to notes; f1, f2... pick favorites.\n");

    for group in ActionGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| ActionGroup::for_action(sc.get_name()) == Some(*group))
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", sc.get_name(), about));
            }
        }
    }

    output
}

/// Clap's help for a single action, or the grouped help if unknown.
pub fn help_for_action(name: &str) -> String {
    let mut cmd = ShellLine::command();
    for sub in cmd.get_subcommands_mut() {
        if sub.get_name() == name || sub.get_all_aliases().any(|a| a == name) {
            return sub.render_help().to_string();
        }
    }
    format!("Unknown action: {}\n\n{}", name, get_grouped_help())
}

/// Parses a shell line. Words are split on whitespace; actions that take
/// free text read it back through [`action_text`].
pub fn parse_line(line: &str) -> Result<Action, clap::Error> {
    ShellLine::try_parse_from(line.split_whitespace()).map(|l| l.action)
}

/// The raw text after the action word, with the line ending removed.
/// Interior spacing is preserved exactly as typed.
pub fn action_text(line: &str) -> &str {
    let line = line.trim_end_matches(['\n', '\r']).trim_start();
    match line.find(char::is_whitespace) {
        Some(end) => line[end..].trim_start(),
        None => "",
    }
}
