//! CLI command handlers
//!
//! This module contains all the command handlers for the faqbot CLI.
//! Each subcommand is implemented in its own module.

pub mod ask;
pub mod chat;
pub mod helpers;
pub mod kb;
pub mod persona;
pub mod prompt;
