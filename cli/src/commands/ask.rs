//! # kbchat Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! Answers a single message without starting the server. The argument goes
//! through exactly the same pipeline as a `POST /chat` body, so it may be
//! JSON, form-encoded or plain text. Useful for trying out a knowledge base
//! file before deploying it.
//!
//! ```bash
//! kbchat ask "what is your refund policy?"
//! kbchat ask '{"message": "opening hours"}'
//! echo 'message=shipping+time' | kbchat ask -
//! ```
//!
use super::KbArgs;
use crate::chat;
use crate::core::config;
use crate::core::error::Result;
use crate::knowledge::KnowledgeBase;
use anyhow::Context;
use clap::Args;
use std::io::Read;
use tracing::info;

#[derive(Args, Debug)]
pub struct AskArgs {
    #[command(flatten)]
    pub kb: KbArgs,

    /// Message body (JSON, form-encoded or plain text). Use `-` to read raw bytes from stdin.
    pub body: String,
}

pub async fn handle_ask(args: AskArgs) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);

    let file_config = config::load_config()?;
    let kb_path = args.kb.resolve(&file_config)?;
    let kb = KnowledgeBase::load(&kb_path)?;

    let body = if args.body == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read message body from stdin")?;
        buf
    } else {
        args.body.into_bytes()
    };

    let reply = chat::handle_body(&kb, &body)?;
    println!("{}", reply);
    Ok(())
}
