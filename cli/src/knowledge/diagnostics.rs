//! # Knowledge Base Diagnostics
//!
//! File: cli/src/knowledge/diagnostics.rs
//!
//! ## Overview
//!
//! Static checks over a loaded knowledge base that point out entries the
//! matcher can never return. Nothing here changes matching behaviour; the
//! results are printed by `kbchat check` and logged by `kbchat serve`.
//!
//! - **Blank entries**: the question is empty.
//! - **Empty answers**: a reachable question with an empty answer. A match on
//!   such an entry ends the scan and the caller receives the fallback reply.
//! - **Shadowed entries**: entry `j` whose question contains the question of
//!   an earlier entry `i`. Every message containing question `j` also
//!   contains question `i`, and `i` is scanned first.
//!
use super::store::KnowledgeBase;

/// Entry `index` is unreachable because entry `by` comes first and its
/// question is a substring of this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadowed {
    pub index: usize,
    pub by: usize,
}

/// Findings for one knowledge base. Indices are zero-based positions in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub blank: Vec<usize>,
    pub empty_answers: Vec<usize>,
    pub shadowed: Vec<Shadowed>,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        self.blank.is_empty() && self.empty_answers.is_empty() && self.shadowed.is_empty()
    }
}

impl KnowledgeBase {
    pub fn diagnostics(&self) -> Diagnostics {
        let mut report = Diagnostics::default();

        for (index, indexed) in self.entries.iter().enumerate() {
            let needle = match indexed.needle.as_deref() {
                Some(needle) => needle,
                None => {
                    report.blank.push(index);
                    continue;
                }
            };

            if indexed.entry.answer.is_empty() {
                report.empty_answers.push(index);
            }

            let shadowing = self.entries[..index]
                .iter()
                .position(|earlier| matches!(earlier.needle.as_deref(), Some(e) if needle.contains(e)));
            if let Some(by) = shadowing {
                report.shadowed.push(Shadowed { index, by });
            }
        }

        report
    }
}
