//! Entity definitions for the quest: items, rooms and the player capability.

mod player;
mod room;

pub use player::*;
pub use room::*;

use serde::{Deserialize, Serialize};

/// Things that can be found lying around a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Item {
    Coffee,
    Cream,
    Sugar,
    /// Nothing to find here.
    #[default]
    None,
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Coffee => write!(f, "coffee"),
            Item::Cream => write!(f, "cream"),
            Item::Sugar => write!(f, "sugar"),
            Item::None => write!(f, "nothing"),
        }
    }
}
