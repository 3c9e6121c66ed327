//! Static FTP reference tables: command templates and response codes.
//!
//! Plain data with lookup and search helpers; no protocol logic lives here.

mod codes;
mod commands;

pub use codes::{lookup_code, search_codes, CodeCategory, ResponseCode, RESPONSE_CODES};
pub use commands::{search_commands, CommandTemplate, COMMANDS};
