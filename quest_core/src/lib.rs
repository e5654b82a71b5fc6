//! # Quest Core
//!
//! The engine side of Coffee Maker Quest. This crate drives a play session
//! over the map and rules defined in `quest_rules`.
//!
//! ## Core Components
//!
//! - **command**: Single-letter player instructions
//! - **session**: The game session state machine
//! - **events**: What each command did, for transcripts
//!
//! The session never prints; every command returns its response text and the
//! front end decides what to show.

pub mod command;
pub mod events;
pub mod session;

pub use command::*;
pub use events::*;
pub use session::*;
