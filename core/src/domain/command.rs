//! PORT and EPRT command synthesis (RFC 959 / RFC 2428).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ip::{classify, strip_brackets, IpKind};
use super::tuple::encode_tuple;

/// Outcome of building a legacy PORT command.
///
/// PORT carries a 6-octet IPv4 tuple and has no IPv6 form in the FTP
/// standard, so IPv6 input yields a typed marker instead of a fabricated
/// command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PortCommand {
    /// A ready-to-send `PORT h1,h2,h3,h4,p1,p2` line.
    Command(String),
    /// Input was not an IPv4 address; EPRT covers IPv6.
    Unsupported,
}

impl PortCommand {
    /// The command line, if one could be built.
    pub fn as_command(&self) -> Option<&str> {
        match self {
            PortCommand::Command(cmd) => Some(cmd),
            PortCommand::Unsupported => None,
        }
    }
}

impl fmt::Display for PortCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortCommand::Command(cmd) => f.write_str(cmd),
            PortCommand::Unsupported => f.write_str("PORT not supported for IPv6 (use EPRT)"),
        }
    }
}

/// Build the legacy `PORT h1,h2,h3,h4,p1,p2` command for an IPv4 address.
pub fn build_port_command(ip: &str, port: u16) -> PortCommand {
    match classify(ip).kind {
        Some(IpKind::Ipv4) => PortCommand::Command(format!("PORT {}", encode_tuple(ip, port).tuple)),
        _ => PortCommand::Unsupported,
    }
}

/// Build the extended `EPRT |<v>|<addr>|<port>|` command.
///
/// The protocol tag is `1` for IPv4 and `2` for IPv6; IPv6 addresses have
/// URL-style brackets stripped. Returns `None` when the address is neither
/// family.
///
/// # Examples
/// ```
/// use ftpcalc_core::build_eprt_command;
///
/// assert_eq!(
///     build_eprt_command("192.168.1.50", 52163).as_deref(),
///     Some("EPRT |1|192.168.1.50|52163|")
/// );
/// assert_eq!(
///     build_eprt_command("[2001:db8::1]", 52163).as_deref(),
///     Some("EPRT |2|2001:db8::1|52163|")
/// );
/// ```
pub fn build_eprt_command(ip: &str, port: u16) -> Option<String> {
    match classify(ip).kind? {
        IpKind::Ipv4 => Some(format!("EPRT |1|{}|{}|", ip.trim(), port)),
        IpKind::Ipv6 => Some(format!("EPRT |2|{}|{}|", strip_brackets(ip.trim()), port)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_command_ipv4() {
        let cmd = build_port_command("192.168.1.50", 52163);
        assert_eq!(cmd.as_command(), Some("PORT 192,168,1,50,203,195"));
        assert_eq!(cmd.to_string(), "PORT 192,168,1,50,203,195");
    }

    #[test]
    fn test_port_command_unsupported_for_ipv6() {
        let cmd = build_port_command("2001:db8::1", 21);
        assert_eq!(cmd, PortCommand::Unsupported);
        assert_eq!(cmd.as_command(), None);
        // The marker is explanatory text, never a fabricated tuple
        assert!(cmd.to_string().contains("EPRT"));
    }

    #[test]
    fn test_eprt_family_tagging() {
        assert_eq!(
            build_eprt_command("192.168.1.50", 52163).as_deref(),
            Some("EPRT |1|192.168.1.50|52163|")
        );
        assert_eq!(
            build_eprt_command("2001:db8::1", 52163).as_deref(),
            Some("EPRT |2|2001:db8::1|52163|")
        );
    }

    #[test]
    fn test_eprt_strips_brackets() {
        assert_eq!(
            build_eprt_command("[2001:db8::1]", 21).as_deref(),
            Some("EPRT |2|2001:db8::1|21|")
        );
    }

    #[test]
    fn test_eprt_invalid_address() {
        assert_eq!(build_eprt_command("example.com", 21), None);
    }

    #[test]
    fn test_port_command_round_trips_through_parse() {
        use crate::domain::parse_tuple;

        for (ip, port) in [("93.184.216.34", 49964u16), ("10.0.0.1", 1), ("192.168.1.50", 65535)] {
            let cmd = build_port_command(ip, port);
            let parsed = parse_tuple(cmd.as_command().unwrap()).unwrap();
            assert_eq!(parsed.ip, ip);
            assert_eq!(parsed.port, port);
        }
    }
}
