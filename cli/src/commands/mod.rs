//! CLI subcommand implementations.

pub mod build;
pub mod check;
pub mod firewall;
pub mod parse;
pub mod recent;
pub mod reference;
pub mod url;
