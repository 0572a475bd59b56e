//! # Knowledge Base Store
//!
//! File: cli/src/knowledge/store.rs
//!
//! ## Overview
//!
//! `KnowledgeBase` is the ordered, read-only collection of question/answer
//! pairs. It is built once, either from a JSON file (`KnowledgeBase::load`) or
//! from entries in memory, and never mutated afterwards; the server shares it
//! between requests through an `Arc`.
//!
//! The lower-cased form of every non-empty question is computed at
//! construction so that the matcher only lower-cases the incoming message.
//!
//! ## File format
//!
//! ```json
//! [
//!   {"question": "refund policy", "answer": "Refunds are processed within 5 business days."},
//!   {"question": "opening hours", "answer": "We are open 9am to 5pm."}
//! ]
//! ```
//!
use super::entry::KnowledgeEntry;
use crate::core::error::{KbchatError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// An entry together with its pre-computed match needle.
#[derive(Debug, Clone)]
pub(super) struct IndexedEntry {
    pub(super) entry: KnowledgeEntry,
    /// Lower-cased question, `None` when the question is empty.
    pub(super) needle: Option<String>,
}

impl From<KnowledgeEntry> for IndexedEntry {
    fn from(entry: KnowledgeEntry) -> Self {
        let needle = if entry.is_blank() {
            None
        } else {
            Some(entry.question.to_lowercase())
        };
        Self { entry, needle }
    }
}

/// Ordered question/answer collection. Insertion order decides which entry
/// wins when several questions match.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub(super) entries: Vec<IndexedEntry>,
}

impl KnowledgeBase {
    pub fn from_entries(entries: impl IntoIterator<Item = KnowledgeEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(IndexedEntry::from).collect(),
        }
    }

    /// Parses a JSON array of `{"question", "answer"}` objects.
    pub fn from_json_str(json: &str) -> std::result::Result<Self, KbchatError> {
        let entries: Vec<KnowledgeEntry> = serde_json::from_str(json)
            .map_err(|e| KbchatError::KnowledgeBase(format!("invalid knowledge base JSON: {}", e)))?;
        Ok(Self::from_entries(entries))
    }

    /// Reads and parses the knowledge base file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Reading knowledge base from {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read knowledge base: {}", path.display()))?;
        let kb = Self::from_json_str(&content)
            .with_context(|| format!("Failed to load knowledge base: {}", path.display()))?;
        info!(
            "Loaded {} knowledge base entries from {}",
            kb.len(),
            path.display()
        );
        Ok(kb)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &KnowledgeEntry> {
        self.entries.iter().map(|indexed| &indexed.entry)
    }
}
