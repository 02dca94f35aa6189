//! # Story Book
//!
//! The data crate of the reader: story nodes, their choices, and the
//! immutable [`StoryGraph`] built once from a story definition.
//! This crate holds no navigation state and performs no I/O beyond parsing.

pub mod error;
pub mod graph;
pub mod nodes;

pub use error::*;
pub use graph::*;
pub use nodes::*;
