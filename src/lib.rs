//! Interpreting spoken chess commands: noisy transcripts in, moves and answers out.
//!
//! The pipeline is `speech` (normalize, classify, extract) → `resolve` (against a
//! `rules::RulesEngine`) → `narrate`. `session` wires it to a listener, a speaker and a
//! computer opponent.

pub mod config;
pub mod core;
pub mod error;
pub mod narrate;
pub mod render;
pub mod resolve;
pub mod rules;
pub mod session;
pub mod speech;

pub use crate::error::{Error, Result};
