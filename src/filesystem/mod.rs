//! In-memory directory tree built from a filesystem walk.
//!
//! The walk is depth-first and fully materialized before anything is
//! rendered. Entries within a level are ordered by name.

mod node;
mod tree;

pub use node::Node;
pub use tree::{TreeBuildError, build};
