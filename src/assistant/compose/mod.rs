//! Response composition for every resolution outcome.

pub mod composer;

pub use composer::{render_project, render_project_deep_dive, ResponseComposer};
