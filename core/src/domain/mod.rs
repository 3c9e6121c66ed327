//! Domain layer - Pure codec logic and data models.
//!
//! This module contains the address validator, the 6-tuple codec and the
//! command builders. These functions have no I/O dependencies, hold no state
//! between calls, and can be tested in isolation.

mod command;
mod ip;
mod tuple;

// Re-export all domain types
pub use command::{build_eprt_command, build_port_command, PortCommand};
pub use ip::{classify, is_valid_ipv4, is_valid_ipv6, IpClassification, IpKind};
pub(crate) use ip::strip_brackets;
pub use tuple::{encode_tuple, parse_port, parse_tuple, ParsedAddress, PortTuple};
