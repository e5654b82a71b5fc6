//! # Quest Rules
//!
//! The rules crate for Coffee Maker Quest - rooms, items, the player
//! capability, the linear map, and the fixed texts the game answers with.
//! This crate holds no session state; it is the single source of truth for
//! what the world looks like.

pub mod entities;
pub mod level;
pub mod mechanics;
pub mod topology;

pub use entities::*;
pub use level::*;
pub use mechanics::*;
pub use topology::*;
