//! Deterministic conversational assistant for a personal portfolio site.
//!
//! The crate matches free-text visitor questions against a curated knowledge
//! base and answers with canned, multi-part text. There is no model call and
//! no network: matching is an ordered first-match scan over trigger
//! keywords, with a small project catalog for entity lookup and a single
//! context-sensitive follow-up rule.

// No escape hatches: the core must stay total and panic-free.
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(unused_must_use)]
#![deny(non_snake_case)]
#![deny(non_camel_case_types)]
#![deny(non_upper_case_globals)]
#![deny(nonstandard_style)]
#![forbid(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]

/// Assistant core: knowledge base, matching, session state, response
/// composition, and the conversation controller.
pub mod assistant;

/// Interactive terminal host standing in for the site's chat widget.
#[allow(clippy::print_stdout)]
pub mod repl;
