//! History module - the ordered record of visited nodes.
//!
//! The history is both the back-navigation stack and the source of reading
//! progress. "Has visited" is permanent for a session, so the set of visited
//! nodes only grows even when the stack shrinks.

mod stack;

pub use stack::*;
