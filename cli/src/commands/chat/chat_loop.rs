//! # Chat Loop
//!
//! File: cli/src/commands/chat/chat_loop.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives one interactive session: read a line, ask the responder, print the
//! reply, record the turn, update the follow-up context. The loop ends on
//! `exit` (any case, surrounding whitespace ignored) or at end of input. The
//! sentinel itself is never sent to the responder or recorded.
//!
//! Input and output are generic so the loop can be exercised with in-memory
//! buffers.
//!
use crate::bot::{Context, Responder, SessionStore};
use crate::common::ui;
use crate::core::error::Result;
use anyhow::Context as _;
use std::io::{BufRead, Write};
use tracing::debug;

const USER_PROMPT: &str = "You: ";
const EXIT_SENTINEL: &str = "exit";

pub fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_SENTINEL)
}

pub struct ChatLoop<'a> {
    responder: Responder,
    store: &'a mut SessionStore,
    context: Option<Context>,
}

impl<'a> ChatLoop<'a> {
    pub fn new(responder: Responder, store: &'a mut SessionStore) -> Self {
        Self {
            responder,
            store,
            context: None,
        }
    }

    #[cfg(test)]
    pub fn context(&self) -> Option<Context> {
        self.context
    }

    /// Handles one user message and returns the reply.
    pub async fn turn(&mut self, message: &str) -> String {
        let response = self.responder.respond(message, self.context).await;
        self.store.record(message, response.as_str());
        self.context = self.responder.next_context(&response);
        debug!("Next context: {:?}", self.context);
        response
    }

    /// Runs until the exit sentinel or end of input. Returns the number of turns handled.
    pub async fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<usize> {
        let mut turns = 0;
        while let Some(line) = ui::read_prompted_line(input, output, USER_PROMPT)? {
            if is_exit(&line) {
                debug!("Exit sentinel received");
                break;
            }
            let response = self.turn(&line).await;
            writeln!(output, "Bot: {}", response).context("Failed to write reply")?;
            turns += 1;
        }
        Ok(turns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::keyword::{
        GREETING_RESPONSE, RETURN_DECLINED_RESPONSE, RETURN_GUIDANCE_RESPONSE,
        RETURN_PROMPT_RESPONSE,
    };
    use crate::bot::KeywordResponder;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn keyword() -> Responder {
        Responder::Keyword(KeywordResponder::new())
    }

    #[test]
    fn test_is_exit() {
        assert!(is_exit("exit"));
        assert!(is_exit("EXIT"));
        assert!(is_exit("  Exit \t"));
        assert!(!is_exit("exit now"));
        assert!(!is_exit(""));
    }

    #[tokio::test]
    async fn test_return_scenario_end_to_end() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("chat_history.json");
        let mut store = SessionStore::new();
        let mut input = Cursor::new("hello\nreturn\nyes\nexit\n");
        let mut output = Vec::new();

        let turns = ChatLoop::new(keyword(), &mut store)
            .run(&mut input, &mut output)
            .await?;
        store.save(&path)?;

        assert_eq!(turns, 3);
        let responses: Vec<&str> = store.turns().iter().map(|t| t.response.as_str()).collect();
        assert_eq!(
            responses,
            vec![GREETING_RESPONSE, RETURN_PROMPT_RESPONSE, RETURN_GUIDANCE_RESPONSE]
        );

        let printed = String::from_utf8(output)?;
        assert!(printed.contains(&format!("Bot: {}", RETURN_GUIDANCE_RESPONSE)));

        let mut reloaded = SessionStore::new();
        assert_eq!(reloaded.load(&path)?, 3);
        assert_eq!(reloaded.turns(), store.turns());
        Ok(())
    }

    #[tokio::test]
    async fn test_context_cleared_after_unrelated_reply() {
        let mut store = SessionStore::new();
        let mut chat = ChatLoop::new(keyword(), &mut store);

        chat.turn("refund").await;
        assert_eq!(chat.context(), Some(Context::ReturnProcess));
        chat.turn("track").await;
        assert_eq!(chat.context(), None);
        // Without the context, "no" is not a reply to the return offer.
        assert_ne!(chat.turn("no").await, RETURN_DECLINED_RESPONSE);
    }

    #[tokio::test]
    async fn test_end_of_input_stops_loop() -> Result<()> {
        let mut store = SessionStore::new();
        let mut input = Cursor::new("hello\n");
        let mut output = Vec::new();

        let turns = ChatLoop::new(keyword(), &mut store)
            .run(&mut input, &mut output)
            .await?;

        assert_eq!(turns, 1);
        assert_eq!(store.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_exit_is_not_recorded() -> Result<()> {
        let mut store = SessionStore::new();
        let mut input = Cursor::new("EXIT\nhello\n");
        let mut output = Vec::new();

        let turns = ChatLoop::new(keyword(), &mut store)
            .run(&mut input, &mut output)
            .await?;

        assert_eq!(turns, 0);
        assert!(store.is_empty());
        assert_eq!(String::from_utf8(output)?, "You: ");
        Ok(())
    }
}
