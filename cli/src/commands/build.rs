//! Build command - derive the tuple, PORT and EPRT lines from an IP and port.

use anyhow::Result;
use ftpcalc_core::{
    build_eprt_command, build_port_command, classify, encode_tuple, IpKind, RecentRepository,
    RecentStore,
};
use serde_json::json;

pub async fn run(ip: &str, port: u16, no_recent: bool, json: bool) -> Result<()> {
    let Some(kind) = classify(ip).kind else {
        if json {
            println!("{}", serde_json::to_string_pretty(&json!({ "valid": false }))?);
        } else {
            println!("'{ip}' is not a valid IPv4 or IPv6 address.");
        }
        return Ok(());
    };

    let port_cmd = build_port_command(ip, port);
    let eprt_cmd = build_eprt_command(ip, port);

    if json {
        let mut out = json!({
            "valid": true,
            "kind": kind,
            "port": port,
            "portCommand": port_cmd.as_command(),
            "eprtCommand": eprt_cmd,
        });
        if kind == IpKind::Ipv4 {
            let tuple = encode_tuple(ip, port);
            out["tuple"] = json!(tuple.tuple);
            out["p1"] = json!(tuple.p1);
            out["p2"] = json!(tuple.p2);
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        if kind == IpKind::Ipv4 {
            let tuple = encode_tuple(ip, port);
            println!("Tuple: {} (p1={}, p2={})", tuple.tuple, tuple.p1, tuple.p2);
        }
        // For IPv6 this prints the explanatory marker, not a command
        println!("PORT:  {port_cmd}");
        if let Some(eprt) = &eprt_cmd {
            println!("EPRT:  {eprt}");
        }
    }

    if !no_recent {
        // A broken store should not break the calculator output
        if let Err(err) = record_recent(ip, port).await {
            eprintln!("warning: could not update recent values: {err}");
        }
    }

    Ok(())
}

async fn record_recent(ip: &str, port: u16) -> ftpcalc_core::Result<()> {
    let store = RecentStore::new()?;
    store.add_recent_ip(ip).await?;
    store.add_recent_port(&port.to_string()).await
}
