//! Room definitions.

use serde::{Deserialize, Serialize};

use super::Item;

/// A single room on the map.
///
/// The adjective and furnishing identify a room; no two rooms in a registry
/// share either of them (compared case-insensitively). Door labels are only
/// written by the registry when a neighbour is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    adjective: String,
    furnishing: String,
    #[serde(default)]
    item: Item,
    #[serde(default)]
    north_door: Option<String>,
    #[serde(default)]
    south_door: Option<String>,
}

impl Room {
    /// Create a new room with no doors.
    pub fn new(adjective: impl Into<String>, furnishing: impl Into<String>, item: Item) -> Self {
        Self {
            adjective: adjective.into(),
            furnishing: furnishing.into(),
            item,
            north_door: None,
            south_door: None,
        }
    }

    pub fn adjective(&self) -> &str {
        &self.adjective
    }

    pub fn furnishing(&self) -> &str {
        &self.furnishing
    }

    pub fn item(&self) -> Item {
        self.item
    }

    /// Label of the door leading north, if a room has been attached there.
    pub fn north_door(&self) -> Option<&str> {
        self.north_door.as_deref()
    }

    /// Label of the door leading south, if any.
    pub fn south_door(&self) -> Option<&str> {
        self.south_door.as_deref()
    }

    /// Text shown to the player on entering the room.
    pub fn description(&self) -> String {
        let mut text = format!(
            "You see a {} room.\nIt has a {}.\n",
            self.adjective, self.furnishing
        );
        if let Some(label) = &self.north_door {
            text.push_str(&format!("A {} door leads North.\n", label));
        }
        if let Some(label) = &self.south_door {
            text.push_str(&format!("A {} door leads South.\n", label));
        }
        text
    }

    pub(crate) fn set_north_door(&mut self, label: impl Into<String>) {
        self.north_door = Some(label.into());
    }

    pub(crate) fn set_south_door(&mut self, label: impl Into<String>) {
        self.south_door = Some(label.into());
    }

    /// Strip both door labels, returning `(north, south)`.
    pub(crate) fn take_doors(&mut self) -> (Option<String>, Option<String>) {
        (self.north_door.take(), self.south_door.take())
    }
}

/// Compare two names after folding both to lowercase, char by char.
pub fn same_ignoring_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
