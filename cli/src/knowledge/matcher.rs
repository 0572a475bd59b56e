//! # Keyword Matcher
//!
//! File: cli/src/knowledge/matcher.rs
//!
//! Case-insensitive substring lookup with a first-match policy: entries are
//! scanned in insertion order and the first question contained in the message
//! wins. There is no scoring, so a short early question beats a longer, more
//! specific one further down the list.
//!
use super::store::KnowledgeBase;
use tracing::debug;

impl KnowledgeBase {
    /// Returns the answer of the first entry whose question occurs in `message`,
    /// ignoring case. Empty questions never match.
    pub fn find_answer(&self, message: &str) -> Option<&str> {
        let haystack = message.to_lowercase();
        self.entries.iter().enumerate().find_map(|(index, indexed)| {
            let needle = indexed.needle.as_deref()?;
            if haystack.contains(needle) {
                debug!(index, question = %indexed.entry.question, "Knowledge base match");
                Some(indexed.entry.answer.as_str())
            } else {
                None
            }
        })
    }
}
