//! # kbchat Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the `kbchat` CLI and the
//! arguments they share.
//!
//! ## Command Groups
//!
//! - `serve`: HTTP service exposing `POST /chat`
//! - `ask`: answer a single message locally, without starting a server
//! - `check`: validate a knowledge base file and report unreachable entries
//!
//! Each command defines its own arguments structure and handler function.
//!
use crate::core::config::{self, Config};
use crate::core::error::Result;
use clap::Args;
use std::path::PathBuf;

/// Command that answers one message from the command line.
pub mod ask;
/// Command that validates a knowledge base file.
pub mod check;
/// Command group for the HTTP chat service. Includes configuration, router and handlers.
pub mod serve;

/// Knowledge base location used when neither a flag, `KBCHAT_KB` nor a config file names one.
pub const DEFAULT_KB_PATH: &str = "knowledge_base.json";

/// `--kb` flag shared by every command that loads the knowledge base.
#[derive(Args, Debug, Clone, Default)]
pub struct KbArgs {
    /// Path to the knowledge base JSON file [default: knowledge_base.json]
    #[arg(long = "kb", env = "KBCHAT_KB", value_name = "PATH")]
    pub kb: Option<PathBuf>,
}

impl KbArgs {
    /// Flag or environment variable first, then the config file, then the default.
    pub fn resolve(&self, config: &Config) -> Result<PathBuf> {
        match &self.kb {
            Some(path) => config::expand_path(path),
            None => Ok(config
                .knowledge
                .path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_KB_PATH))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::KnowledgeSection;

    #[test]
    fn test_kb_path_precedence() {
        let file_config = Config {
            knowledge: KnowledgeSection {
                path: Some(PathBuf::from("/from/config.json")),
            },
            ..Default::default()
        };

        let flag = KbArgs {
            kb: Some(PathBuf::from("/from/flag.json")),
        };
        assert_eq!(
            flag.resolve(&file_config).unwrap(),
            PathBuf::from("/from/flag.json")
        );

        let no_flag = KbArgs::default();
        assert_eq!(
            no_flag.resolve(&file_config).unwrap(),
            PathBuf::from("/from/config.json")
        );
        assert_eq!(
            no_flag.resolve(&Config::default()).unwrap(),
            PathBuf::from(DEFAULT_KB_PATH)
        );
    }
}
