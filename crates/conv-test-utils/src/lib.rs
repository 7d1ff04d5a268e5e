//! Shared test fixtures for the conventions workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`] - git markers and repositories at increasing realism
//! - [`project`] - [`TestProject`](project::TestProject) builder for Java project trees

pub mod git;
pub mod project;
