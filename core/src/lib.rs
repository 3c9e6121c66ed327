//! ftpcalc Core Library
//!
//! Reference and calculator library for FTP's out-of-band data-connection
//! setup. Provides functionality to:
//! - Validate and classify IPv4/IPv6 address strings
//! - Convert (IP, port) pairs to the legacy 6-octet tuple and back
//! - Synthesize PORT and EPRT command lines (RFC 959 / RFC 2428)
//! - Look up FTP commands and response codes
//! - Generate firewall rule text for control and data channels
//! - Build FTP/FTPS/SFTP URLs
//! - Keep a small recency list of recently used IPs and ports
//!
//! # Architecture
//! - `domain`: pure codec logic and data models, no I/O
//! - `ports`: trait definitions (interfaces)
//! - `reference`: static command/response-code tables
//! - `firewall`, `url`: text generators over validated inputs
//! - `store`: JSON-backed recency persistence
//!
//! The domain layer never fails: malformed input and not-found are
//! negative results (`false`/`None`), and no operation performs I/O.

pub mod domain;
pub mod error;
pub mod firewall;
pub mod ports;
pub mod reference;
pub mod store;
pub mod url;

// Re-export domain types (primary API)
pub use domain::{
    build_eprt_command, build_port_command, classify, encode_tuple, is_valid_ipv4, is_valid_ipv6,
    parse_port, parse_tuple, IpClassification, IpKind, ParsedAddress, PortCommand, PortTuple,
};

// Re-export other commonly used types
pub use error::{Error, Result};
pub use firewall::{Direction, FirewallRules, FirewallSpec, FtpMode};
pub use ports::RecentRepository;
pub use reference::{
    lookup_code, search_codes, search_commands, CodeCategory, CommandTemplate, ResponseCode,
    COMMANDS, RESPONSE_CODES,
};
pub use store::{RecentStore, RecentValues, RECENT_CAP};
pub use url::{ClientCommands, Protocol, UrlSpec};
