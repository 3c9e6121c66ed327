//! Quick-copy FTP command templates.

use serde::Serialize;

/// A copyable FTP command template.
///
/// Templates with a `{args}` placeholder take one argument (a username,
/// a path, a file name); the rest are sent as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandTemplate {
    /// Human-readable label, e.g. "Retrieve file -> client".
    pub label: &'static str,
    /// The command text, with an optional `{args}` placeholder.
    pub template: &'static str,
}

impl CommandTemplate {
    /// Whether this template takes an argument.
    pub fn has_args(&self) -> bool {
        self.template.contains("{args}")
    }

    /// Render the template, substituting `{args}` when one is provided.
    ///
    /// With no argument the template is returned verbatim, placeholder
    /// included, so the operator can see where their value goes.
    pub fn render(&self, args: Option<&str>) -> String {
        match args {
            Some(a) if !a.is_empty() => self.template.replace("{args}", a),
            _ => self.template.to_string(),
        }
    }
}

/// The command reference table.
pub const COMMANDS: &[CommandTemplate] = &[
    CommandTemplate { label: "Username", template: "USER {args}" },
    CommandTemplate { label: "Password", template: "PASS {args}" },
    CommandTemplate { label: "System type", template: "SYST" },
    CommandTemplate { label: "Features", template: "FEAT" },
    CommandTemplate { label: "Print working dir", template: "PWD" },
    CommandTemplate { label: "Binary mode", template: "TYPE I" },
    CommandTemplate { label: "ASCII mode", template: "TYPE A" },
    CommandTemplate { label: "List (simple)", template: "LIST" },
    CommandTemplate { label: "List (detailed)", template: "LIST -al" },
    CommandTemplate { label: "Change dir", template: "CWD {args}" },
    CommandTemplate { label: "Make dir", template: "MKD {args}" },
    CommandTemplate { label: "Remove dir", template: "RMD {args}" },
    CommandTemplate { label: "Delete file", template: "DELE {args}" },
    CommandTemplate { label: "Rename from", template: "RNFR {args}" },
    CommandTemplate { label: "Rename to", template: "RNTO {args}" },
    CommandTemplate { label: "Retrieve file -> client", template: "RETR {args}" },
    CommandTemplate { label: "Store file -> server", template: "STOR {args}" },
    CommandTemplate { label: "Quit", template: "QUIT" },
];

/// Case-insensitive substring search over labels and command text.
pub fn search_commands(term: &str) -> Vec<&'static CommandTemplate> {
    let term = term.to_lowercase();
    COMMANDS
        .iter()
        .filter(|c| {
            c.label.to_lowercase().contains(&term) || c.template.to_lowercase().contains(&term)
        })
        .collect()
}
