//! # Knowledge Entry
//!
//! File: cli/src/knowledge/entry.rs
//!
//! A single question/answer pair as it appears in the knowledge base file.
//!
use serde::{Deserialize, Deserializer};

/// One question/answer pair.
///
/// Missing and `null` fields deserialize to the empty string; unknown fields
/// are ignored, so knowledge base files may carry extra metadata per entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KnowledgeEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl KnowledgeEntry {
    #[cfg(test)]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// An empty question is a substring of every message, so it never matches.
    /// Whitespace-only questions are kept: `" "` matches any message with a space.
    pub fn is_blank(&self) -> bool {
        self.question.is_empty()
    }
}
