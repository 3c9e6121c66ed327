//! Firewall command - generate rule text for FTP data connections.

use anyhow::Result;
use ftpcalc_core::FirewallSpec;

pub fn run(spec: &FirewallSpec, json: bool) -> Result<()> {
    let Some(rules) = spec.generate() else {
        println!("Invalid configuration: check the port range and server IP.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    print_section("iptables (IPv4)", &rules.iptables);
    print_section("ip6tables (IPv6)", &rules.ip6tables);
    print_section("Windows Firewall", &rules.windows_firewall);
    print_section("ufw", &rules.ufw);

    Ok(())
}

fn print_section(title: &str, lines: &[String]) {
    println!("# {title}");
    for line in lines {
        println!("{line}");
    }
    println!();
}
