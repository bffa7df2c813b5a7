//! Curated knowledge base: topic rules, project catalog, and the builtin
//! content fixture.
//!
//! Content is owned by content authors, constructed once at startup, and
//! read-only for the lifetime of the process.

pub mod base;
pub mod fixture;
pub mod project;
pub mod topic;

pub use base::KnowledgeBase;
pub use project::{ProjectEntity, ProjectMetric};
pub use topic::TopicRule;
