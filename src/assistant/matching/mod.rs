//! Query normalization and deterministic matching.
//!
//! Matching is substring containment over lowercased text, evaluated in
//! declaration order with first-match-wins semantics. No tokenization, no
//! scoring, no ML.

pub mod entities;
pub mod normalize;
pub mod topics;

pub use entities::resolve_project;
pub use normalize::normalize_query;
pub use topics::match_topic;
