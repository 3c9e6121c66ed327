//! Parse command - recover an IP and port from pasted tuple text.

use anyhow::Result;
use ftpcalc_core::parse_tuple;

pub fn run(text: &str, json: bool) -> Result<()> {
    let parsed = parse_tuple(text);

    if json {
        // Prints `null` when no tuple was found
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    match parsed {
        Some(p) => {
            println!("IP: {}  Port: {} (p1={}, p2={})", p.ip, p.port, p.p1, p.p2);
            println!("{}:{}", p.ip, p.port);
        }
        None => println!("No h1,h2,h3,h4,p1,p2 tuple found in input."),
    }

    Ok(())
}
