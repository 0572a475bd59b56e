//! # kbchat Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by every command:
//! - `config`: Configuration file discovery, loading and merging
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{KbchatError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
