//! Recent command - show or clear recently used values.

use anyhow::Result;
use ftpcalc_core::{RecentRepository, RecentStore};

pub async fn show(json: bool) -> Result<()> {
    let store = RecentStore::new()?;
    let values = store.load().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    if values.ips.is_empty() && values.ports.is_empty() {
        println!("No recent values.");
        return Ok(());
    }

    if !values.ips.is_empty() {
        println!("Recent IPs:");
        for ip in &values.ips {
            println!("  {ip}");
        }
    }
    if !values.ports.is_empty() {
        println!("Recent ports:");
        for port in &values.ports {
            println!("  {port}");
        }
    }

    Ok(())
}

pub async fn clear() -> Result<()> {
    let store = RecentStore::new()?;
    RecentRepository::clear(&store).await?;
    println!("Recent values cleared.");
    Ok(())
}
