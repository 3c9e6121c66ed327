//! ftpcalc CLI - FTP PORT/PASV address calculator and reference
//!
//! A command-line tool for building and parsing the address tuples FTP
//! uses to negotiate data connections, plus command/response-code
//! reference tables, firewall rule text and URL assembly.

mod commands;

use clap::{Parser, Subcommand};
use ftpcalc_core::{Direction, FirewallSpec, FtpMode, Protocol, UrlSpec};

#[derive(Parser)]
#[command(name = "ftpcalc")]
#[command(author, version, about = "FTP PORT/PASV address calculator and reference")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the 6-tuple, PORT and EPRT lines from an IP and port
    #[command(alias = "b")]
    Build {
        /// IPv4 or IPv6 address
        ip: String,

        /// Data port
        #[arg(value_parser = clap::value_parser!(u16).range(1..))]
        port: u16,

        /// Don't record the values in the recency list
        #[arg(long)]
        no_recent: bool,
    },

    /// Extract an IP and port from pasted 227/PORT/tuple text
    #[command(alias = "p")]
    Parse {
        /// Pasted text containing an h1,h2,h3,h4,p1,p2 tuple
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Classify a string as IPv4, IPv6 or invalid
    Check {
        /// Address to classify
        ip: String,
    },

    /// Show the FTP command reference
    Commands {
        /// Filter by label or command text
        #[arg(short, long)]
        search: Option<String>,

        /// Substitute {args} placeholders with this value
        #[arg(short, long)]
        args: Option<String>,
    },

    /// Show the FTP response-code reference
    Codes {
        /// Look up one code exactly
        code: Option<u16>,

        /// Filter by code digits or description text
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by category (success, intermediate, error, permanent)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Generate firewall rule text for FTP control and data connections
    Firewall {
        /// Transfer mode (active or passive)
        #[arg(long, default_value = "passive")]
        mode: FtpMode,

        /// Rule direction (inbound, outbound or both)
        #[arg(long, default_value = "both")]
        direction: Direction,

        /// First data port
        #[arg(long, default_value_t = 21000)]
        port_start: u16,

        /// Last data port
        #[arg(long, default_value_t = 21100)]
        port_end: u16,

        /// Restrict inbound data rules to this server address
        #[arg(long)]
        server_ip: Option<String>,
    },

    /// Build an FTP/FTPS/SFTP URL
    Url {
        /// Hostname or IP address
        host: String,

        /// URL scheme (ftp, ftps or sftp)
        #[arg(long, default_value = "ftp")]
        protocol: Protocol,

        /// Username for the userinfo component
        #[arg(short, long)]
        user: Option<String>,

        /// Password for the userinfo component
        #[arg(long)]
        password: Option<String>,

        /// Explicit port (omitted from the URL when it is the default)
        #[arg(short, long)]
        port: Option<u16>,

        /// Remote path
        #[arg(long)]
        path: Option<String>,

        /// Transfer mode hint for the client commands (active or passive)
        #[arg(long, default_value = "passive")]
        mode: FtpMode,
    },

    /// Show or clear recently used values
    Recent {
        #[command(subcommand)]
        action: Option<RecentAction>,
    },
}

#[derive(Subcommand)]
enum RecentAction {
    /// Clear the recency lists
    Clear,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build { ip, port, no_recent } => {
            commands::build::run(&ip, port, no_recent, cli.json).await?;
        }
        Commands::Parse { text } => {
            commands::parse::run(&text.join(" "), cli.json)?;
        }
        Commands::Check { ip } => {
            commands::check::run(&ip, cli.json)?;
        }
        Commands::Commands { search, args } => {
            commands::reference::commands(search.as_deref(), args.as_deref(), cli.json)?;
        }
        Commands::Codes { code, search, category } => {
            commands::reference::codes(code, search.as_deref(), category.as_deref(), cli.json)?;
        }
        Commands::Firewall {
            mode,
            direction,
            port_start,
            port_end,
            server_ip,
        } => {
            let spec = FirewallSpec {
                mode,
                direction,
                port_start,
                port_end,
                server_ip,
            };
            commands::firewall::run(&spec, cli.json)?;
        }
        Commands::Url {
            host,
            protocol,
            user,
            password,
            port,
            path,
            mode,
        } => {
            let spec = UrlSpec {
                protocol,
                host,
                username: user,
                password,
                port,
                path,
                mode,
            };
            commands::url::run(&spec, cli.json)?;
        }
        Commands::Recent { action } => match action {
            Some(RecentAction::Clear) => commands::recent::clear().await?,
            None => commands::recent::show(cli.json).await?,
        },
    }

    Ok(())
}
