//! FTP response-code reference table (RFC 959 reply codes).

use serde::{Deserialize, Serialize};

/// Category of an FTP reply code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeCategory {
    /// 2xx positive completion.
    Success,
    /// 1xx/3xx positive preliminary or intermediate.
    Intermediate,
    /// 4xx transient negative completion.
    Error,
    /// 5xx permanent negative completion.
    Permanent,
}

impl CodeCategory {
    /// All categories, in display order.
    pub const ALL: [CodeCategory; 4] = [
        CodeCategory::Success,
        CodeCategory::Intermediate,
        CodeCategory::Error,
        CodeCategory::Permanent,
    ];

    /// Get the display name for this category.
    pub fn display_name(&self) -> &'static str {
        match self {
            CodeCategory::Success => "Success",
            CodeCategory::Intermediate => "Intermediate",
            CodeCategory::Error => "Transient error",
            CodeCategory::Permanent => "Permanent error",
        }
    }

    /// Parse a category name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "success" => Some(CodeCategory::Success),
            "intermediate" => Some(CodeCategory::Intermediate),
            "error" => Some(CodeCategory::Error),
            "permanent" => Some(CodeCategory::Permanent),
            _ => None,
        }
    }
}

/// A reply code with its standard description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseCode {
    /// Numeric reply code, e.g. 227.
    pub code: u16,
    /// Standard description text.
    pub description: &'static str,
    /// Reply category.
    pub category: CodeCategory,
}

/// The response-code reference table.
pub const RESPONSE_CODES: &[ResponseCode] = &[
    ResponseCode { code: 150, description: "File status okay; about to open data connection", category: CodeCategory::Intermediate },
    ResponseCode { code: 200, description: "Command okay", category: CodeCategory::Success },
    ResponseCode { code: 202, description: "Command not implemented, superfluous at this site", category: CodeCategory::Success },
    ResponseCode { code: 211, description: "System status, or system help reply", category: CodeCategory::Success },
    ResponseCode { code: 212, description: "Directory status", category: CodeCategory::Success },
    ResponseCode { code: 213, description: "File status", category: CodeCategory::Success },
    ResponseCode { code: 214, description: "Help message", category: CodeCategory::Success },
    ResponseCode { code: 215, description: "NAME system type", category: CodeCategory::Success },
    ResponseCode { code: 220, description: "Service ready for new user", category: CodeCategory::Success },
    ResponseCode { code: 221, description: "Service closing control connection", category: CodeCategory::Success },
    ResponseCode { code: 225, description: "Data connection open; no transfer in progress", category: CodeCategory::Success },
    ResponseCode { code: 226, description: "Closing data connection; transfer complete", category: CodeCategory::Success },
    ResponseCode { code: 227, description: "Entering Passive Mode (h1,h2,h3,h4,p1,p2)", category: CodeCategory::Success },
    ResponseCode { code: 229, description: "Entering Extended Passive Mode (|||port|)", category: CodeCategory::Success },
    ResponseCode { code: 230, description: "User logged in, proceed", category: CodeCategory::Success },
    ResponseCode { code: 250, description: "Requested file action okay, completed", category: CodeCategory::Success },
    ResponseCode { code: 257, description: "PATHNAME created", category: CodeCategory::Success },
    ResponseCode { code: 331, description: "User name okay, need password", category: CodeCategory::Intermediate },
    ResponseCode { code: 332, description: "Need account for login", category: CodeCategory::Intermediate },
    ResponseCode { code: 350, description: "Requested file action pending further information", category: CodeCategory::Intermediate },
    ResponseCode { code: 421, description: "Service not available, closing control connection", category: CodeCategory::Error },
    ResponseCode { code: 425, description: "Cannot open data connection", category: CodeCategory::Error },
    ResponseCode { code: 426, description: "Connection closed; transfer aborted", category: CodeCategory::Error },
    ResponseCode { code: 450, description: "Requested file action not taken; file unavailable", category: CodeCategory::Error },
    ResponseCode { code: 451, description: "Requested action aborted; local error in processing", category: CodeCategory::Error },
    ResponseCode { code: 452, description: "Requested action not taken; insufficient storage space", category: CodeCategory::Error },
    ResponseCode { code: 500, description: "Syntax error, command unrecognized", category: CodeCategory::Permanent },
    ResponseCode { code: 501, description: "Syntax error in parameters or arguments", category: CodeCategory::Permanent },
    ResponseCode { code: 502, description: "Command not implemented", category: CodeCategory::Permanent },
    ResponseCode { code: 503, description: "Bad sequence of commands", category: CodeCategory::Permanent },
    ResponseCode { code: 504, description: "Command not implemented for that parameter", category: CodeCategory::Permanent },
    ResponseCode { code: 530, description: "Not logged in", category: CodeCategory::Permanent },
    ResponseCode { code: 532, description: "Need account for storing files", category: CodeCategory::Permanent },
    ResponseCode { code: 550, description: "Requested action not taken; file unavailable", category: CodeCategory::Permanent },
    ResponseCode { code: 551, description: "Requested action aborted; page type unknown", category: CodeCategory::Permanent },
    ResponseCode { code: 552, description: "Requested file action aborted; exceeded storage allocation", category: CodeCategory::Permanent },
    ResponseCode { code: 553, description: "Requested action not taken; file name not allowed", category: CodeCategory::Permanent },
];

/// Look up a reply code exactly.
pub fn lookup_code(code: u16) -> Option<&'static ResponseCode> {
    RESPONSE_CODES.iter().find(|c| c.code == code)
}

/// Substring search over code digits and descriptions (case-insensitive).
pub fn search_codes(term: &str) -> Vec<&'static ResponseCode> {
    let term = term.to_lowercase();
    RESPONSE_CODES
        .iter()
        .filter(|c| {
            c.code.to_string().contains(&term) || c.description.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let pasv = lookup_code(227).unwrap();
        assert_eq!(pasv.category, CodeCategory::Success);
        assert!(pasv.description.contains("Passive Mode"));

        assert!(lookup_code(999).is_none());
    }

    #[test]
    fn test_search_by_digits_and_text() {
        let by_digits = search_codes("22");
        assert!(by_digits.iter().any(|c| c.code == 220));
        assert!(by_digits.iter().any(|c| c.code == 229));

        let by_text = search_codes("data connection");
        assert!(by_text.iter().any(|c| c.code == 150));
        assert!(by_text.iter().any(|c| c.code == 425));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(CodeCategory::parse("SUCCESS"), Some(CodeCategory::Success));
        assert_eq!(CodeCategory::parse("permanent"), Some(CodeCategory::Permanent));
        assert_eq!(CodeCategory::parse("bogus"), None);
    }
}
