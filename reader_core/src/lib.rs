//! # Reader Core
//!
//! The navigation and history state machine of the branching reader. It owns
//! where the reader is, where they have been, and the order in which things
//! happen when they move.
//!
//! ## Core Components
//!
//! - **history**: ordered record of visited nodes with duplicate suppression
//! - **navigation**: the single-flight transition state machine
//! - **persistence**: durable history storage behind a key-value contract
//! - **audio**: at-most-one-clip playback policy
//! - **events**: exit/enter/settled signals for the render surface
//!
//! ## Design Philosophy
//!
//! - **Single owner**: only the [`NavigationController`] mutates navigation state
//! - **Host-driven time**: the core owns no timers; the host calls `advance`
//! - **Never blocked**: audio and persistence failures are logged, not raised

pub mod audio;
pub mod config;
pub mod error;
pub mod events;
pub mod history;
pub mod navigation;
pub mod persistence;

pub use audio::*;
pub use config::*;
pub use error::*;
pub use events::*;
pub use history::*;
pub use navigation::*;
pub use persistence::*;

#[cfg(test)]
mod testing;
