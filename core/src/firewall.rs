//! Firewall rule text generation for FTP control and data connections.
//!
//! Pure template substitution over validated inputs: given the transfer
//! mode, rule direction and a data-port range, emit ready-to-paste rule
//! lines for iptables, ip6tables, Windows `netsh advfirewall` and ufw.
//! Nothing here talks to a firewall; the output is text for an operator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{classify, is_valid_ipv6, IpKind};

/// FTP data-connection mode the rules are written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FtpMode {
    /// Server connects back to the client (PORT/EPRT).
    Active,
    /// Client connects to the server's advertised port (PASV/EPSV).
    Passive,
}

impl FromStr for FtpMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(FtpMode::Active),
            "passive" => Ok(FtpMode::Passive),
            other => Err(format!("unknown mode '{other}' (expected active or passive)")),
        }
    }
}

impl fmt::Display for FtpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FtpMode::Active => f.write_str("active"),
            FtpMode::Passive => f.write_str("passive"),
        }
    }
}

/// Traffic direction the rules should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
    Both,
}

impl Direction {
    fn inbound(&self) -> bool {
        matches!(self, Direction::Inbound | Direction::Both)
    }

    fn outbound(&self) -> bool {
        matches!(self, Direction::Outbound | Direction::Both)
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inbound" | "in" => Ok(Direction::Inbound),
            "outbound" | "out" => Ok(Direction::Outbound),
            "both" => Ok(Direction::Both),
            other => Err(format!(
                "unknown direction '{other}' (expected inbound, outbound or both)"
            )),
        }
    }
}

/// Validated inputs for rule generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirewallSpec {
    pub mode: FtpMode,
    pub direction: Direction,
    /// First data port, inclusive.
    pub port_start: u16,
    /// Last data port, inclusive.
    pub port_end: u16,
    /// Optional server address used as a source filter on inbound data rules.
    pub server_ip: Option<String>,
}

/// Generated rule lines, one entry per paste-able command.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallRules {
    pub iptables: Vec<String>,
    pub ip6tables: Vec<String>,
    pub windows_firewall: Vec<String>,
    pub ufw: Vec<String>,
}

impl FirewallSpec {
    /// Generate rule text for every supported firewall.
    ///
    /// Returns `None` when the port range is invalid (either end 0 or
    /// start > end) or the server IP fails classification.
    pub fn generate(&self) -> Option<FirewallRules> {
        if self.port_start == 0 || self.port_end == 0 || self.port_start > self.port_end {
            return None;
        }
        let ip_kind = match self.effective_server_ip() {
            Some(ip) => Some(classify(ip).kind?),
            None => None,
        };

        let range = self.port_range();
        Some(FirewallRules {
            iptables: self.netfilter_rules("iptables", IpKind::Ipv4, ip_kind, &range),
            ip6tables: self.netfilter_rules("ip6tables", IpKind::Ipv6, ip_kind, &range),
            windows_firewall: self.windows_rules(ip_kind, &range),
            ufw: self.ufw_rules(ip_kind, &range),
        })
    }

    /// The server IP with blank input treated as "no filter".
    fn effective_server_ip(&self) -> Option<&str> {
        self.server_ip
            .as_deref()
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
    }

    fn port_range(&self) -> String {
        if self.port_start == self.port_end {
            self.port_start.to_string()
        } else {
            format!("{}:{}", self.port_start, self.port_end)
        }
    }

    /// Source filter for inbound data rules, only when the server IP
    /// matches the family the chain speaks.
    fn source_filter(&self, family: IpKind, ip_kind: Option<IpKind>) -> String {
        match (self.effective_server_ip(), ip_kind) {
            (Some(ip), Some(kind)) if kind == family => {
                format!(" -s {}", clean_ip(ip))
            }
            _ => String::new(),
        }
    }

    fn netfilter_rules(
        &self,
        cmd: &str,
        family: IpKind,
        ip_kind: Option<IpKind>,
        range: &str,
    ) -> Vec<String> {
        let mut rules = Vec::new();

        // Control connection (port 21)
        if self.direction.inbound() {
            rules.push(format!("{cmd} -A INPUT -p tcp --dport 21 -j ACCEPT"));
        }
        if self.direction.outbound() {
            rules.push(format!("{cmd} -A OUTPUT -p tcp --sport 21 -j ACCEPT"));
        }

        // Data connections
        match self.mode {
            FtpMode::Passive => {
                if self.direction.inbound() {
                    let src = self.source_filter(family, ip_kind);
                    rules.push(format!("{cmd} -A INPUT -p tcp --dport {range}{src} -j ACCEPT"));
                }
                if self.direction.outbound() {
                    rules.push(format!("{cmd} -A OUTPUT -p tcp --sport {range} -j ACCEPT"));
                }
            }
            FtpMode::Active => {
                if self.direction.outbound() {
                    rules.push(format!("{cmd} -A OUTPUT -p tcp --dport 20 -j ACCEPT"));
                    rules.push(format!("{cmd} -A OUTPUT -p tcp --sport {range} -j ACCEPT"));
                }
                if self.direction.inbound() {
                    rules.push(format!("{cmd} -A INPUT -p tcp --sport 20 -j ACCEPT"));
                    let src = self.source_filter(family, ip_kind);
                    rules.push(format!("{cmd} -A INPUT -p tcp --dport {range}{src} -j ACCEPT"));
                }
            }
        }

        rules
    }

    fn windows_rules(&self, ip_kind: Option<IpKind>, range: &str) -> Vec<String> {
        let mut rules = Vec::new();
        let rule_name = match self.mode {
            FtpMode::Passive => "FTP-Passive",
            FtpMode::Active => "FTP-Active",
        };
        let ip_version = match ip_kind {
            Some(IpKind::Ipv4) => "-ipv4",
            Some(IpKind::Ipv6) => "-ipv6",
            None => "",
        };

        rules.push(format!(
            "netsh advfirewall firewall add rule name=\"FTP-Control{ip_version}\" dir=in action=allow protocol=TCP localport=21"
        ));

        match self.mode {
            FtpMode::Passive => {
                rules.push(format!(
                    "netsh advfirewall firewall add rule name=\"{rule_name}-Data{ip_version}\" dir=in action=allow protocol=TCP localport={range}"
                ));
                if let Some(ip) = self.effective_server_ip() {
                    rules.push(format!(
                        "netsh advfirewall firewall add rule name=\"{rule_name}-Data-Specific{ip_version}\" dir=in action=allow protocol=TCP localport={range} remoteip={}",
                        clean_ip(ip)
                    ));
                }
            }
            FtpMode::Active => {
                rules.push(format!(
                    "netsh advfirewall firewall add rule name=\"{rule_name}-Data-Out{ip_version}\" dir=out action=allow protocol=TCP remoteport=20"
                ));
                rules.push(format!(
                    "netsh advfirewall firewall add rule name=\"{rule_name}-Data-In{ip_version}\" dir=in action=allow protocol=TCP localport={range}"
                ));
            }
        }

        rules
    }

    fn ufw_rules(&self, ip_kind: Option<IpKind>, range: &str) -> Vec<String> {
        let mut rules = vec!["ufw allow 21/tcp".to_string()];

        match self.mode {
            FtpMode::Passive => {
                if self.port_start == self.port_end {
                    rules.push(format!("ufw allow {}/tcp", self.port_start));
                } else {
                    rules.push(format!("ufw allow {}:{}/tcp", self.port_start, self.port_end));
                }
                if let (Some(ip), Some(_)) = (self.effective_server_ip(), ip_kind) {
                    rules.push(format!(
                        "ufw allow from {} to any port {range} proto tcp",
                        clean_ip(ip)
                    ));
                }
            }
            FtpMode::Active => {
                rules.push("ufw allow out 20/tcp".to_string());
                rules.push(format!("ufw allow {range}/tcp"));
            }
        }

        rules
    }
}

/// Strip URL-style brackets from IPv6 addresses before use in rule text.
fn clean_ip(ip: &str) -> &str {
    if is_valid_ipv6(ip) {
        crate::domain::strip_brackets(ip)
    } else {
        ip
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(mode: FtpMode, direction: Direction, server_ip: Option<&str>) -> FirewallSpec {
        FirewallSpec {
            mode,
            direction,
            port_start: 21000,
            port_end: 21100,
            server_ip: server_ip.map(str::to_string),
        }
    }

    #[test]
    fn test_passive_inbound_with_source_filter() {
        let rules = spec(FtpMode::Passive, Direction::Inbound, Some("203.0.113.7"))
            .generate()
            .unwrap();

        assert!(rules
            .iptables
            .contains(&"iptables -A INPUT -p tcp --dport 21 -j ACCEPT".to_string()));
        assert!(rules.iptables.contains(
            &"iptables -A INPUT -p tcp --dport 21000:21100 -s 203.0.113.7 -j ACCEPT".to_string()
        ));
        // An IPv4 server address never shows up in the ip6tables chain
        assert!(rules
            .ip6tables
            .contains(&"ip6tables -A INPUT -p tcp --dport 21000:21100 -j ACCEPT".to_string()));
        // No outbound rules were requested
        assert!(rules.iptables.iter().all(|r| !r.contains("OUTPUT")));
    }

    #[test]
    fn test_active_both_directions() {
        let rules = spec(FtpMode::Active, Direction::Both, None).generate().unwrap();

        assert!(rules
            .iptables
            .contains(&"iptables -A OUTPUT -p tcp --dport 20 -j ACCEPT".to_string()));
        assert!(rules
            .iptables
            .contains(&"iptables -A INPUT -p tcp --sport 20 -j ACCEPT".to_string()));
        assert!(rules.ufw.contains(&"ufw allow out 20/tcp".to_string()));
        assert!(rules.ufw.contains(&"ufw allow 21000:21100/tcp".to_string()));
    }

    #[test]
    fn test_ipv6_server_address() {
        let rules = spec(FtpMode::Passive, Direction::Both, Some("[2001:db8::7]"))
            .generate()
            .unwrap();

        // Brackets are stripped and the filter lands on ip6tables only
        assert!(rules.ip6tables.contains(
            &"ip6tables -A INPUT -p tcp --dport 21000:21100 -s 2001:db8::7 -j ACCEPT".to_string()
        ));
        assert!(rules
            .iptables
            .contains(&"iptables -A INPUT -p tcp --dport 21000:21100 -j ACCEPT".to_string()));
        assert!(rules
            .windows_firewall
            .iter()
            .any(|r| r.contains("remoteip=2001:db8::7")));
    }

    #[test]
    fn test_single_port_range() {
        let mut s = spec(FtpMode::Passive, Direction::Inbound, None);
        s.port_end = s.port_start;
        let rules = s.generate().unwrap();
        assert!(rules
            .iptables
            .contains(&"iptables -A INPUT -p tcp --dport 21000 -j ACCEPT".to_string()));
        assert!(rules.ufw.contains(&"ufw allow 21000/tcp".to_string()));
    }

    #[test]
    fn test_blank_server_ip_means_no_filter() {
        let baseline = spec(FtpMode::Passive, Direction::Both, None).generate().unwrap();

        for blank in ["", "   "] {
            let rules = spec(FtpMode::Passive, Direction::Both, Some(blank))
                .generate()
                .unwrap();
            assert_eq!(rules.iptables, baseline.iptables);
            assert_eq!(rules.windows_firewall, baseline.windows_firewall);
            assert_eq!(rules.ufw, baseline.ufw);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let mut s = spec(FtpMode::Passive, Direction::Both, None);
        s.port_start = 22000;
        s.port_end = 21000;
        assert!(s.generate().is_none());

        let s = spec(FtpMode::Passive, Direction::Both, Some("not-an-ip"));
        assert!(s.generate().is_none());
    }
}
