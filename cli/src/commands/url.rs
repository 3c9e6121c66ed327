//! Url command - assemble an FTP/FTPS/SFTP URL and client invocations.

use anyhow::Result;
use ftpcalc_core::UrlSpec;
use serde_json::json;

pub fn run(spec: &UrlSpec, json: bool) -> Result<()> {
    // build() and commands() share one validity gate
    let (Some(url), Some(commands)) = (spec.build(), spec.commands()) else {
        println!("'{}' is not a valid hostname or IP address.", spec.host);
        return Ok(());
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "url": url,
                "client": commands.client,
                "curl": commands.curl,
                "wget": commands.wget,
            }))?
        );
        return Ok(());
    }

    println!("{url}");
    if let Some(client) = &commands.client {
        println!("\n# {}", spec.protocol);
        println!("{client}");
    }
    println!("\n# curl\n{}", commands.curl);
    if let Some(wget) = &commands.wget {
        println!("\n# wget\n{wget}");
    }

    Ok(())
}
