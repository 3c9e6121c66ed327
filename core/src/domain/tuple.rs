//! The legacy 6-octet tuple codec used by PORT commands and 227 replies.
//!
//! FTP encodes an IPv4 address and a 16-bit port as six comma-separated
//! decimal groups `h1,h2,h3,h4,p1,p2` where `port = p1*256 + p2`. This
//! module converts in both directions. The representation only exists for
//! IPv4; IPv6 data connections are negotiated with EPSV/EPRT instead.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// An `(IP, port)` pair encoded as the 6-octet tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortTuple {
    /// The comma-separated tuple text, e.g. "192,168,1,50,203,195".
    pub tuple: String,
    /// High byte of the port.
    pub p1: u8,
    /// Low byte of the port.
    pub p2: u8,
}

/// An `(IP, port)` pair recovered from free-form text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAddress {
    /// Dotted-decimal IPv4 address.
    pub ip: String,
    /// Decoded port, `p1*256 + p2`.
    pub port: u16,
    /// High byte of the port.
    pub p1: u8,
    /// Low byte of the port.
    pub p2: u8,
}

/// Encode a validated IPv4 address and port as a 6-octet tuple.
///
/// The dotted groups are carried over verbatim (no renormalization), so a
/// caller that validated "010.0.0.1" gets "010,0,0,1,...". Callers must
/// validate `ip` with [`is_valid_ipv4`](super::is_valid_ipv4) first; the
/// output for non-IPv4 input is unspecified.
pub fn encode_tuple(ip: &str, port: u16) -> PortTuple {
    let p1 = (port / 256) as u8;
    let p2 = (port % 256) as u8;
    PortTuple {
        tuple: format!("{},{},{}", ip.trim().replace('.', ","), p1, p2),
        p1,
        p2,
    }
}

/// Parse a port string, accepting only in-range decimal values.
///
/// Out-of-range values, non-numeric strings and empty strings are all the
/// same "invalid port"; port 0 is reserved and rejected.
pub fn parse_port(s: &str) -> Option<u16> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match s.parse::<u32>() {
        Ok(n) if (1..=65535).contains(&n) => Some(n as u16),
        _ => None,
    }
}

/// Extract and decode the first 6-octet tuple embedded in free-form text.
///
/// Accepts a bare tuple, a full `PORT h1,h2,h3,h4,p1,p2` line, or a pasted
/// `227 Entering Passive Mode (...)` reply. The scan takes the leftmost
/// match only; if any of its six groups exceeds 255 the whole match is
/// rejected without looking for a second candidate elsewhere in the text.
/// Absence of a tuple is an ordinary `None`, not an error.
///
/// # Examples
/// ```
/// use ftpcalc_core::parse_tuple;
///
/// let parsed = parse_tuple("227 Entering Passive Mode (93,184,216,34,195,44).").unwrap();
/// assert_eq!(parsed.ip, "93.184.216.34");
/// assert_eq!(parsed.port, 49964);
/// ```
pub fn parse_tuple(text: &str) -> Option<ParsedAddress> {
    let regex = Regex::new(r"(\d{1,3}),(\d{1,3}),(\d{1,3}),(\d{1,3}),(\d{1,3}),(\d{1,3})").unwrap();
    let caps = regex.captures(text)?;

    let mut groups = [0u8; 6];
    for (i, group) in groups.iter_mut().enumerate() {
        // 1-3 digits always parse as u16; the shared <= 255 bound covers
        // both the IP octets and the port bytes
        let n: u16 = caps[i + 1].parse().ok()?;
        if n > 255 {
            return None;
        }
        *group = n as u8;
    }

    let [a, b, c, d, p1, p2] = groups;
    Some(ParsedAddress {
        ip: format!("{a}.{b}.{c}.{d}"),
        port: u16::from(p1) * 256 + u16::from(p2),
        p1,
        p2,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_port_math() {
        for port in [1u16, 255, 256, 1024, 49964, 65535] {
            let t = encode_tuple("10.0.0.1", port);
            assert_eq!(u16::from(t.p1) * 256 + u16::from(t.p2), port);
        }
    }

    #[test]
    fn test_encode_tuple_text() {
        let t = encode_tuple("192.168.1.50", 52163);
        assert_eq!(t.tuple, "192,168,1,50,203,195");
        assert_eq!(t.p1, 203);
        assert_eq!(t.p2, 195);
    }

    #[test]
    fn test_encode_preserves_octet_text() {
        // Octets are carried over verbatim, not renormalized
        let t = encode_tuple("010.0.0.1", 21);
        assert_eq!(t.tuple, "010,0,0,1,0,21");
    }

    #[test]
    fn test_parse_port_boundaries() {
        assert_eq!(parse_port("1"), Some(1));
        assert_eq!(parse_port("65535"), Some(65535));
        assert_eq!(parse_port(" 21 "), Some(21));
        assert_eq!(parse_port("0"), None);
        assert_eq!(parse_port("65536"), None);
        assert_eq!(parse_port(""), None);
        assert_eq!(parse_port("2x1"), None);
        assert_eq!(parse_port("-1"), None);
    }

    #[test]
    fn test_parse_bare_tuple() {
        let parsed = parse_tuple("192,168,1,50,203,195").unwrap();
        assert_eq!(parsed.ip, "192.168.1.50");
        assert_eq!(parsed.port, 52163);
        assert_eq!((parsed.p1, parsed.p2), (203, 195));
    }

    #[test]
    fn test_parse_227_reply() {
        let parsed = parse_tuple("227 Entering Passive Mode (93,184,216,34,195,44).").unwrap();
        assert_eq!(parsed.ip, "93.184.216.34");
        assert_eq!(parsed.port, 195 * 256 + 44);
    }

    #[test]
    fn test_parse_port_command_line() {
        let parsed = parse_tuple("PORT 10,0,0,7,4,1").unwrap();
        assert_eq!(parsed.ip, "10.0.0.7");
        assert_eq!(parsed.port, 1025);
    }

    #[test]
    fn test_parse_takes_leftmost_match() {
        let parsed = parse_tuple("1,2,3,4,0,21 and 5,6,7,8,0,22").unwrap();
        assert_eq!(parsed.ip, "1.2.3.4");
        assert_eq!(parsed.port, 21);
    }

    #[test]
    fn test_parse_rejects_out_of_range_group() {
        // Documented tolerance: a single out-of-range group rejects the
        // match outright; the scan does not retry on a later candidate.
        assert_eq!(parse_tuple("1,2,3,4,256,1"), None);
        assert_eq!(parse_tuple("999,2,3,4,5,6"), None);
        assert_eq!(parse_tuple("1,2,3,4,256,1 but 5,6,7,8,0,22 is fine"), None);
    }

    #[test]
    fn test_parse_not_found() {
        assert_eq!(parse_tuple(""), None);
        assert_eq!(parse_tuple("229 Entering Extended Passive Mode (|||6446|)"), None);
        assert_eq!(parse_tuple("1,2,3,4,5"), None);
    }

    #[test]
    fn test_round_trip() {
        for (ip, port) in [("93.184.216.34", 49964u16), ("10.0.0.1", 1), ("255.255.255.255", 65535)] {
            let encoded = encode_tuple(ip, port);
            let parsed = parse_tuple(&encoded.tuple).unwrap();
            assert_eq!(parsed.ip, ip);
            assert_eq!(parsed.port, port);
            assert_eq!((parsed.p1, parsed.p2), (encoded.p1, encoded.p2));
        }
    }
}
