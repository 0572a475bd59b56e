//! # kbchat Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements configuration loading and merging for kbchat. Every
//! setting has a built-in default, may be overridden by a configuration file,
//! and finally by command-line flags or `KBCHAT_*` environment variables
//! (handled by the individual commands on top of the `Config` produced here).
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.kbchat.toml` in the current directory or an ancestor
//!    (the search stops at the first directory containing `.git`)
//! 2. User-specific `<config dir>/kbchat/config.toml`
//! 3. Default values defined by the commands
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//! enable_cors = true
//!
//! [knowledge]
//! path = "data/knowledge_base.json" # relative to this file
//! ```
//!
//! Loading configuration:
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let port = cfg.server.port.unwrap_or(8000);
//! ```
//!
use crate::core::error::{KbchatError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::IpAddr;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Name of the project configuration file searched for from the current directory upwards.
pub const PROJECT_CONFIG_FILENAME: &str = ".kbchat.toml";

/// Represents the main configuration structure, loaded from TOML files.
///
/// Every leaf is optional so that a file only needs to mention the settings it
/// overrides; merging picks the first source that set a value.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub knowledge: KnowledgeSection,
}

/// Settings for `kbchat serve`.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// Interface to bind to.
    pub host: Option<IpAddr>,
    /// First port to try.
    pub port: Option<u16>,
    /// Send permissive CORS headers.
    pub enable_cors: Option<bool>,
}

/// Location of the knowledge base file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KnowledgeSection {
    /// Path to the JSON knowledge base. Relative paths are resolved against
    /// the directory of the configuration file that set them.
    pub path: Option<PathBuf>,
}

/// Loads the user and project configuration files and merges them.
///
/// Missing files are not an error; the result is then `Config::default()`.
pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "kbchat", "kbchat") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file ({}) found in current directory or ancestors.",
            PROJECT_CONFIG_FILENAME
        );
        Ok(None)
    }
}

/// Walks from `start` up to the filesystem root looking for `.kbchat.toml`.
/// Stops early (returning `None`) at a directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

/// Reads and parses one configuration file, resolving a relative
/// `knowledge.path` against the file's own directory.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    validate_config(&config)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    if let Some(kb_path) = config.knowledge.path.take() {
        let expanded = expand_path(&kb_path)?;
        let resolved = match path.parent() {
            Some(parent) if expanded.is_relative() => parent.join(expanded),
            _ => expanded,
        };
        debug!(
            "Knowledge base path from {} resolved to {}",
            path.display(),
            resolved.display()
        );
        config.knowledge.path = Some(resolved);
    }

    Ok(config)
}

/// Project settings win over user settings, field by field.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    Config {
        server: ServerSection {
            host: project.server.host.or(user.server.host),
            port: project.server.port.or(user.server.port),
            enable_cors: project.server.enable_cors.or(user.server.enable_cors),
        },
        knowledge: KnowledgeSection {
            path: project.knowledge.path.or(user.knowledge.path),
        },
    }
}

/// Checks the values as written in the file, before any path resolution.
fn validate_config(config: &Config) -> Result<()> {
    if let Some(path) = &config.knowledge.path {
        if path.as_os_str().is_empty() {
            return Err(anyhow!(KbchatError::Config(
                "knowledge.path cannot be empty".to_string()
            )));
        }
    }
    Ok(())
}

/// Expands `~` and `$VAR` / `${VAR}` references in a path.
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw).map_err(|e| {
        anyhow!(KbchatError::Config(format!(
            "Cannot expand path '{}': {}",
            raw, e
        )))
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [knowledge]
            path = "/srv/kb.json"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.server.host, Some("127.0.0.1".parse().unwrap()));
        assert_eq!(config.server.port, Some(9000));
        assert_eq!(config.server.enable_cors, None);
        assert_eq!(config.knowledge.path, Some(PathBuf::from("/srv/kb.json")));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str("[server]\nbogus = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_relative_kb_path_resolved_against_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join(PROJECT_CONFIG_FILENAME);
        fs::write(&config_path, "[knowledge]\npath = \"data/kb.json\"\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.knowledge.path,
            Some(temp_dir.path().join("data/kb.json"))
        );
    }

    #[test]
    fn test_invalid_host_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join(PROJECT_CONFIG_FILENAME);
        fs::write(&config_path, "[server]\nhost = \"not-an-ip\"\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML"));
    }

    #[test]
    fn test_find_project_config_in_ancestor() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        let found = find_project_config_path(&nested);
        assert_eq!(found, Some(temp_dir.path().join(PROJECT_CONFIG_FILENAME)));
    }

    #[test]
    fn test_find_project_config_stops_at_git() {
        let temp_dir = tempdir().unwrap();
        let repo = temp_dir.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();

        assert_eq!(find_project_config_path(&repo), None);
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = Config {
            server: ServerSection {
                host: Some("10.0.0.1".parse().unwrap()),
                port: Some(7000),
                enable_cors: Some(false),
            },
            knowledge: KnowledgeSection {
                path: Some(PathBuf::from("/user/kb.json")),
            },
        };
        let project = Config {
            server: ServerSection {
                port: Some(9000),
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.server.port, Some(9000));
        assert_eq!(merged.server.host, Some("10.0.0.1".parse().unwrap()));
        assert_eq!(merged.server.enable_cors, Some(false));
        assert_eq!(merged.knowledge.path, Some(PathBuf::from("/user/kb.json")));
    }

    #[test]
    fn test_validate_config_empty_kb_path() {
        let config = Config {
            knowledge: KnowledgeSection {
                path: Some(PathBuf::new()),
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("knowledge.path cannot be empty"));
    }

    #[test]
    fn test_empty_kb_path_in_file_rejected() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join(PROJECT_CONFIG_FILENAME);
        fs::write(&config_path, "[knowledge]\npath = \"\"\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{:#}", err).contains("knowledge.path cannot be empty"));
    }

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path(Path::new("~/kb.json")).unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("kb.json"));

        let absolute = expand_path(Path::new("/etc/kb.json")).unwrap();
        assert_eq!(absolute, PathBuf::from("/etc/kb.json"));
    }
}
