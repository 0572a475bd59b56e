//! # kbchat HTTP Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//!
//! ## Overview
//!
//! This module resolves the effective settings for `kbchat serve`. It combines:
//! 1. Command-line arguments and `KBCHAT_*` environment variables (highest priority)
//! 2. The merged configuration files from `core::config` (`[server]`, `[knowledge]`)
//! 3. Default values (lowest priority)
//!
//! ## Examples
//!
//! ```rust
//! let config = load_and_merge_config(&args)?;
//! println!("Listening on: {}:{}", config.host, config.port);
//! println!("Knowledge base: {}", config.knowledge_base.display());
//! ```
//!
use crate::commands::KbArgs;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use clap::Args;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use tracing::debug;

/// # Serve Command Arguments (`ServeArgs`)
///
/// Options left unset fall back to the configuration files, then to the
/// defaults in `ServerConfig::default()`.
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    #[command(flatten)]
    pub kb: KbArgs,

    /// Network interface to bind to [default: 0.0.0.0]
    #[arg(long, env = "KBCHAT_HOST")]
    pub host: Option<IpAddr>,

    /// First port to try; the next free port is used if it is taken [default: 8000]
    #[arg(long, short, env = "KBCHAT_PORT")]
    pub port: Option<u16>,

    /// Do not send CORS headers. By default every origin, method and header is allowed.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Server Configuration (`ServerConfig`)
///
/// The consolidated settings the server runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// The network IP address the server binds to.
    pub host: IpAddr,

    /// The first port the server tries to bind.
    pub port: u16,

    /// Whether permissive CORS headers are sent.
    pub enable_cors: bool,

    /// Path of the knowledge base JSON file.
    pub knowledge_base: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            enable_cors: true,
            knowledge_base: PathBuf::from(crate::commands::DEFAULT_KB_PATH),
        }
    }
}

/// Loads the configuration files and applies `args` on top of them.
pub fn load_and_merge_config(args: &ServeArgs) -> Result<ServerConfig> {
    let file_config = config::load_config()?;
    merge(args, &file_config)
}

/// Flags win over file settings, file settings win over defaults.
/// `--no-cors` can only turn CORS off; the file may still disable it when the flag is absent.
fn merge(args: &ServeArgs, file_config: &Config) -> Result<ServerConfig> {
    let defaults = ServerConfig::default();
    let server = &file_config.server;

    let effective = ServerConfig {
        host: args.host.or(server.host).unwrap_or(defaults.host),
        port: args.port.or(server.port).unwrap_or(defaults.port),
        enable_cors: !args.no_cors && server.enable_cors.unwrap_or(defaults.enable_cors),
        knowledge_base: args.kb.resolve(file_config)?,
    };
    debug!("Merged serve configuration: {:?}", effective);
    Ok(effective)
}
