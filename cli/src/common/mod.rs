//! # Supportbot Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Cross-cutting helpers that are not specific to any one command:
//!
//! - **`fs`**: file reads and writes with contextual errors.
//! - **`ui`**: terminal prompts and banners for the interactive chat.
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Utilities for terminal interaction (prompts, banners).
pub mod ui;
