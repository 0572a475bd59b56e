//! # kbchat Knowledge Base
//!
//! File: cli/src/knowledge/mod.rs
//!
//! ## Overview
//!
//! The static question/answer collection the chatbot answers from, and the
//! lookup performed against it.
//!
//! ## Architecture
//!
//! - `entry`: `KnowledgeEntry`, one question/answer pair
//! - `store`: `KnowledgeBase`, the ordered read-only collection and its JSON loader
//! - `matcher`: `KnowledgeBase::find_answer`, case-insensitive first-match substring lookup
//! - `diagnostics`: `KnowledgeBase::diagnostics`, blank/unreachable entry report
//!
//! ## Usage
//!
//! ```rust
//! let kb = KnowledgeBase::load(Path::new("knowledge_base.json"))?;
//! if let Some(answer) = kb.find_answer("What is your refund policy?") {
//!     println!("{}", answer);
//! }
//! ```
//!
mod diagnostics;
mod entry;
mod matcher;
mod store;

pub use diagnostics::Diagnostics;
pub use entry::KnowledgeEntry;
pub use store::KnowledgeBase;
