//! Reference commands - FTP command templates and response codes.

use anyhow::Result;
use ftpcalc_core::{
    lookup_code, search_codes, search_commands, CodeCategory, CommandTemplate, ResponseCode,
    COMMANDS, RESPONSE_CODES,
};

pub fn commands(search: Option<&str>, args: Option<&str>, json: bool) -> Result<()> {
    let rows: Vec<&CommandTemplate> = match search {
        Some(term) => search_commands(term),
        None => COMMANDS.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&rendered_rows(&rows, args))?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No matching commands.");
        return Ok(());
    }

    println!("{:<22} COMMAND", "LABEL");
    println!("{}", "-".repeat(50));
    for cmd in &rows {
        println!("{:<22} {}", cmd.label, cmd.render(args));
    }

    Ok(())
}

/// JSON rows carry the same substituted command text as the table output.
fn rendered_rows(rows: &[&CommandTemplate], args: Option<&str>) -> Vec<serde_json::Value> {
    rows.iter()
        .map(|cmd| {
            serde_json::json!({
                "label": cmd.label,
                "command": cmd.render(args),
            })
        })
        .collect()
}

pub fn codes(
    code: Option<u16>,
    search: Option<&str>,
    category: Option<&str>,
    json: bool,
) -> Result<()> {
    let category = match category {
        Some(name) => match CodeCategory::parse(name) {
            Some(cat) => Some(cat),
            None => {
                println!("Unknown category '{name}' (expected success, intermediate, error or permanent).");
                return Ok(());
            }
        },
        None => None,
    };

    let mut rows: Vec<&ResponseCode> = match (code, search) {
        (Some(code), _) => lookup_code(code).into_iter().collect(),
        (None, Some(term)) => search_codes(term),
        (None, None) => RESPONSE_CODES.iter().collect(),
    };
    if let Some(cat) = category {
        rows.retain(|c| c.category == cat);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No matching response codes.");
        return Ok(());
    }

    println!("{:<6} {:<18} DESCRIPTION", "CODE", "CATEGORY");
    println!("{}", "-".repeat(80));
    for code in &rows {
        println!(
            "{:<6} {:<18} {}",
            code.code,
            code.category.display_name(),
            code.description
        );
    }
    println!("\nTotal: {} codes", rows.len());

    Ok(())
}
