//! Level definitions - the map authored as data.
//!
//! A level lists its rooms from south to north. Each room may name the label
//! of the door leading to its northern neighbour and of the door leading back
//! south; unnamed doors are labelled after the room they lead to.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::entities::{Item, Room};
use crate::topology::{RoomRegistry, TopologyError};

/// Errors raised while loading or building a level.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML level: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON level: {0}")]
    Json(#[from] serde_json::Error),

    #[error("level has no rooms")]
    NoRooms,

    #[error("starting room {0:?} is not part of the level")]
    UnknownStart(String),

    #[error("room {index} cannot be placed: {source}")]
    Topology {
        index: usize,
        #[source]
        source: TopologyError,
    },
}

/// One room as written in a level file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub adjective: String,
    pub furnishing: String,
    #[serde(default)]
    pub item: Item,
    /// Label of the door leading to the next room north.
    #[serde(default)]
    pub north_door: Option<String>,
    /// Label of the door leading back to the previous room south.
    #[serde(default)]
    pub south_door: Option<String>,
}

impl RoomSpec {
    pub fn new(adjective: impl Into<String>, furnishing: impl Into<String>, item: Item) -> Self {
        Self {
            adjective: adjective.into(),
            furnishing: furnishing.into(),
            item,
            north_door: None,
            south_door: None,
        }
    }

    /// Set the label of the door leading north.
    pub fn with_north_door(mut self, label: impl Into<String>) -> Self {
        self.north_door = Some(label.into());
        self
    }

    /// Set the label of the door leading south.
    pub fn with_south_door(mut self, label: impl Into<String>) -> Self {
        self.south_door = Some(label.into());
        self
    }

    fn to_room(&self) -> Room {
        Room::new(self.adjective.clone(), self.furnishing.clone(), self.item)
    }

    fn display_name(&self) -> String {
        format!("{} room", self.adjective)
    }
}

/// A complete level: the rooms plus where the player starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub rooms: Vec<RoomSpec>,
    /// Adjective of the starting room. Defaults to the southern-most room.
    #[serde(default)]
    pub start: Option<String>,
}

impl LevelConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, LevelError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a level file. `.json` files are read as JSON, everything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::debug!(path = %path.display(), is_json, "loading level");
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_toml_str(&source)
        }
    }

    /// Build the room registry and resolve the starting index.
    pub fn build(&self) -> Result<(RoomRegistry, usize), LevelError> {
        let mut rooms = self.rooms.iter();
        let first = rooms.next().ok_or(LevelError::NoRooms)?;

        let mut registry = RoomRegistry::new();
        registry
            .add_first_room(first.to_room())
            .map_err(|source| LevelError::Topology { index: 0, source })?;

        let mut previous = first;
        for (offset, next) in rooms.enumerate() {
            let north = previous
                .north_door
                .clone()
                .unwrap_or_else(|| next.display_name());
            let south = next
                .south_door
                .clone()
                .unwrap_or_else(|| previous.display_name());

            registry
                .add_room_at_north(next.to_room(), north, south)
                .map_err(|source| LevelError::Topology {
                    index: offset + 1,
                    source,
                })?;
            previous = next;
        }

        let start = match &self.start {
            Some(adjective) => registry
                .position_of(adjective)
                .ok_or_else(|| LevelError::UnknownStart(adjective.clone()))?,
            None => 0,
        };

        tracing::info!(rooms = registry.len(), start, "level built");
        Ok((registry, start))
    }

    /// The six-room map of the original Coffee Maker Quest.
    pub fn classic() -> Self {
        Self {
            rooms: vec![
                RoomSpec::new("Small", "Quaint sofa", Item::Cream).with_north_door("Magenta"),
                RoomSpec::new("Funny", "Sad record player", Item::None)
                    .with_south_door("Beige")
                    .with_north_door("Massive"),
                RoomSpec::new("Refinanced", "Tight pizza", Item::Coffee)
                    .with_south_door("Massive")
                    .with_north_door("Smart"),
                RoomSpec::new("Dumb", "Flat energy drink", Item::None)
                    .with_south_door("Dumb")
                    .with_north_door("Slim"),
                RoomSpec::new("Bloodthirsty", "Beautiful bag of money", Item::None)
                    .with_south_door("Vegetarian")
                    .with_north_door("Sandy"),
                RoomSpec::new("Rough", "Perfect air hockey table", Item::Sugar)
                    .with_south_door("Minimalist"),
            ],
            start: None,
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::classic()
    }
}
