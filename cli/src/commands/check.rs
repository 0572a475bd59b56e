//! # kbchat Check Command
//!
//! File: cli/src/commands/check.rs
//!
//! ## Overview
//!
//! Loads a knowledge base file and reports entries the first-match lookup can
//! never return. A file that loads is a success even when warnings are
//! printed; a file that cannot be read or parsed fails the command.
//!
//! Positions in the output are 1-based, in file order.
//!
use super::KbArgs;
use crate::core::config;
use crate::core::error::Result;
use crate::knowledge::{Diagnostics, KnowledgeBase, KnowledgeEntry};
use clap::Args;
use std::path::Path;
use tracing::info;

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub kb: KbArgs,
}

pub async fn handle_check(args: CheckArgs) -> Result<()> {
    info!("Handling check command with args: {:?}", args);

    let file_config = config::load_config()?;
    let kb_path = args.kb.resolve(&file_config)?;
    let kb = KnowledgeBase::load(&kb_path)?;

    print!("{}", render_report(&kb_path, &kb, &kb.diagnostics()));
    Ok(())
}

fn render_report(path: &Path, kb: &KnowledgeBase, report: &Diagnostics) -> String {
    let entries: Vec<&KnowledgeEntry> = kb.entries().collect();
    let mut out = format!(
        "Knowledge base: {} ({} {})\n",
        path.display(),
        entries.len(),
        if entries.len() == 1 { "entry" } else { "entries" }
    );

    for &index in &report.blank {
        out.push_str(&format!(
            "warning: entry {} has an empty question and is never matched\n",
            index + 1
        ));
    }
    for &index in &report.empty_answers {
        out.push_str(&format!(
            "warning: entry {} ({:?}) has an empty answer; matches get the fallback reply\n",
            index + 1,
            entries[index].question
        ));
    }
    for shadowed in &report.shadowed {
        out.push_str(&format!(
            "warning: entry {} ({:?}) is unreachable: entry {} ({:?}) matches first\n",
            shadowed.index + 1,
            entries[shadowed.index].question,
            shadowed.by + 1,
            entries[shadowed.by].question
        ));
    }

    let warnings = report.blank.len() + report.empty_answers.len() + report.shadowed.len();
    if report.is_clean() {
        out.push_str("OK: every entry is reachable\n");
    } else {
        out.push_str(&format!("{} warning(s)\n", warnings));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_clean_report() {
        let kb = KnowledgeBase::from_entries(vec![KnowledgeEntry::new("hours", "9-5")]);
        let out = render_report(Path::new("kb.json"), &kb, &kb.diagnostics());
        assert_eq!(out, "Knowledge base: kb.json (1 entry)\nOK: every entry is reachable\n");
    }

    #[test]
    fn test_render_warnings() {
        let kb = KnowledgeBase::from_entries(vec![
            KnowledgeEntry::new("refund", "short"),
            KnowledgeEntry::new("", "never"),
            KnowledgeEntry::new("refund policy", ""),
        ]);
        let out = render_report(Path::new("kb.json"), &kb, &kb.diagnostics());
        assert!(out.contains("warning: entry 2 has an empty question"));
        assert!(out.contains("warning: entry 3 (\"refund policy\") has an empty answer"));
        assert!(out.contains(
            "warning: entry 3 (\"refund policy\") is unreachable: entry 1 (\"refund\") matches first"
        ));
        assert!(out.ends_with("3 warning(s)\n"));
    }
}
