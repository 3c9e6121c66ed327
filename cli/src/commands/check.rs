//! Check command - classify a string as IPv4, IPv6 or invalid.

use anyhow::Result;
use ftpcalc_core::classify;

pub fn run(ip: &str, json: bool) -> Result<()> {
    let classification = classify(ip);

    if json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
        return Ok(());
    }

    match classification.kind {
        Some(kind) => println!("{ip}: valid {} address", kind.display_name()),
        None => println!("{ip}: not a valid IPv4 or IPv6 address"),
    }

    Ok(())
}
