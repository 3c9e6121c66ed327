//! IP address validation and classification.

use serde::{Deserialize, Serialize};

/// Address family of a validated IP string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpKind {
    /// Dotted-decimal IPv4 (e.g., "192.168.1.50").
    Ipv4,
    /// Full or compressed IPv6, optionally bracketed (e.g., "[2001:db8::1]").
    Ipv6,
}

impl IpKind {
    /// Get the display name for this address family.
    pub fn display_name(&self) -> &'static str {
        match self {
            IpKind::Ipv4 => "IPv4",
            IpKind::Ipv6 => "IPv6",
        }
    }
}

/// Result of classifying an arbitrary string as an IP address.
///
/// `kind` is `Some` exactly when `valid` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpClassification {
    /// Whether the string is a well-formed IPv4 or IPv6 address.
    pub valid: bool,
    /// Which family matched, if any.
    pub kind: Option<IpKind>,
}

/// Check whether a string is a well-formed dotted-decimal IPv4 address.
///
/// Each of the four groups must be 1-3 decimal digits with value <= 255.
/// Leading-zero groups like "01" are accepted; FTP server output is not
/// always canonical, so the grammar stays length-and-range based.
pub fn is_valid_ipv4(ip: &str) -> bool {
    let parts: Vec<&str> = ip.trim().split('.').collect();
    if parts.len() != 4 {
        return false;
    }
    parts.iter().all(|part| is_decimal_octet(part))
}

fn is_decimal_octet(part: &str) -> bool {
    if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    // 3 ASCII digits always fit in u16
    part.parse::<u16>().map(|n| n <= 255).unwrap_or(false)
}

/// Check whether a string is a well-formed IPv6 address.
///
/// Accepts full 8-group notation and compressed `::` notation with at most
/// one compression point, optionally wrapped in URL-style brackets.
/// Validation only: the address is never canonicalized or expanded.
pub fn is_valid_ipv6(ip: &str) -> bool {
    let clean = strip_brackets(ip);

    if clean.contains("::") {
        let sides: Vec<&str> = clean.split("::").collect();
        if sides.len() > 2 {
            return false;
        }
        let left: Vec<&str> = sides[0].split(':').filter(|p| !p.is_empty()).collect();
        let right: Vec<&str> = sides[1].split(':').filter(|p| !p.is_empty()).collect();

        // The compression must stand in for at least one group
        if left.len() + right.len() >= 8 {
            return false;
        }
        return left.iter().chain(right.iter()).all(|p| is_hex_group(p));
    }

    let groups: Vec<&str> = clean.split(':').collect();
    groups.len() == 8 && groups.iter().all(|p| is_hex_group(p))
}

fn is_hex_group(group: &str) -> bool {
    (1..=4).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Strip one optional leading `[` and trailing `]` (URL convention).
pub(crate) fn strip_brackets(ip: &str) -> &str {
    let ip = ip.strip_prefix('[').unwrap_or(ip);
    ip.strip_suffix(']').unwrap_or(ip)
}

/// Classify an arbitrary string as IPv4, IPv6 or invalid.
///
/// IPv4 is tried first; the grammars are disjoint in practice, but callers
/// depend on IPv4-first priority if that ever changes.
///
/// # Examples
/// ```
/// use ftpcalc_core::{classify, IpKind};
///
/// assert_eq!(classify("192.168.1.50").kind, Some(IpKind::Ipv4));
/// assert_eq!(classify("2001:db8::1").kind, Some(IpKind::Ipv6));
/// assert!(!classify("example.com").valid);
/// ```
pub fn classify(ip: &str) -> IpClassification {
    if is_valid_ipv4(ip) {
        return IpClassification {
            valid: true,
            kind: Some(IpKind::Ipv4),
        };
    }
    if is_valid_ipv6(ip) {
        return IpClassification {
            valid: true,
            kind: Some(IpKind::Ipv6),
        };
    }
    IpClassification {
        valid: false,
        kind: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_boundaries() {
        assert!(is_valid_ipv4("0.0.0.0"));
        assert!(is_valid_ipv4("255.255.255.255"));
        assert!(!is_valid_ipv4("256.0.0.1"));
        assert!(!is_valid_ipv4("1.2.3"));
        assert!(!is_valid_ipv4("1.2.3.4.5"));
        assert!(!is_valid_ipv4("1.2.3."));
        assert!(!is_valid_ipv4("a.b.c.d"));
        assert!(!is_valid_ipv4(""));
    }

    #[test]
    fn test_ipv4_accepts_whitespace_and_leading_zeros() {
        // Documented tolerance: surrounding whitespace is trimmed and
        // non-canonical octets like "01" pass the range check.
        assert!(is_valid_ipv4("  10.0.0.1  "));
        assert!(is_valid_ipv4("01.2.3.4"));
    }

    #[test]
    fn test_ipv6_full_notation() {
        assert!(is_valid_ipv6("1:2:3:4:5:6:7:8"));
        assert!(is_valid_ipv6("2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
        assert!(!is_valid_ipv6("1:2:3:4:5:6:7"));
        assert!(!is_valid_ipv6("1:2:3:4:5:6:7:8:9"));
        assert!(!is_valid_ipv6("1:2:3:4:5:6:7:zzzz"));
        assert!(!is_valid_ipv6("12345:2:3:4:5:6:7:8"));
    }

    #[test]
    fn test_ipv6_compressed_notation() {
        assert!(is_valid_ipv6("::"));
        assert!(is_valid_ipv6("::1"));
        assert!(is_valid_ipv6("2001:db8::1"));
        assert!(is_valid_ipv6("fe80::"));
        // Two compression points
        assert!(!is_valid_ipv6("a:b::c::d"));
        // Compression that replaces nothing
        assert!(!is_valid_ipv6("1:2:3:4::5:6:7:8"));
    }

    #[test]
    fn test_ipv6_brackets() {
        assert!(is_valid_ipv6("[::1]"));
        assert!(is_valid_ipv6("[2001:db8::1]"));
        assert!(!is_valid_ipv6("[not-an-ip]"));
    }

    #[test]
    fn test_classify_priority_and_kinds() {
        let v4 = classify("192.168.1.50");
        assert!(v4.valid);
        assert_eq!(v4.kind, Some(IpKind::Ipv4));

        let v6 = classify("[2001:db8::1]");
        assert!(v6.valid);
        assert_eq!(v6.kind, Some(IpKind::Ipv6));

        let bad = classify("example.com");
        assert!(!bad.valid);
        assert_eq!(bad.kind, None);
    }
}
