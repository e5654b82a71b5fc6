//! Map topology - the strict south-to-north chain of rooms.
//!
//! Rooms live in an index-addressed arena. Index 0 is the southern-most
//! room and the last index is the northern-most one. Rooms are only ever
//! appended at the northern end, and appending is the only way door labels
//! get written.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::{same_ignoring_case, Room};

/// Reasons a room could not be placed on the map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("a first room already exists")]
    AlreadySeeded,

    #[error("no first room has been added yet")]
    Empty,

    #[error("a room with adjective {0:?} already exists")]
    DuplicateAdjective(String),

    #[error("a room with furnishing {0:?} already exists")]
    DuplicateFurnishing(String),

    #[error("door labels of room {0} do not match its neighbours")]
    DoorMismatch(usize),
}

/// The ordered chain of rooms making up the map.
///
/// Serialized as a plain list of rooms. Deserializing replays that list
/// through `add_first_room` and `add_room_at_north`, so a stored map obeys
/// the same rules as one built in code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Room>", into = "Vec<Room>")]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl RoomRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the southern-most room. Only allowed while the registry is empty.
    ///
    /// Returns the index of the new room (always 0).
    pub fn add_first_room(&mut self, room: Room) -> Result<usize, TopologyError> {
        if !self.rooms.is_empty() {
            tracing::warn!(adjective = room.adjective(), "first room rejected: registry not empty");
            return Err(TopologyError::AlreadySeeded);
        }

        tracing::debug!(adjective = room.adjective(), "first room added");
        self.rooms.push(room);
        Ok(0)
    }

    /// Attach `room` to the north of the current northern-most room.
    ///
    /// On success the old tail's north door is labelled `north_door`, the new
    /// room's south door is labelled `south_door`, and the new room becomes
    /// the tail. On failure nothing is touched.
    pub fn add_room_at_north(
        &mut self,
        mut room: Room,
        north_door: impl Into<String>,
        south_door: impl Into<String>,
    ) -> Result<usize, TopologyError> {
        if let Err(err) = self.check_unique(&room) {
            tracing::warn!(adjective = room.adjective(), error = %err, "room rejected");
            return Err(err);
        }

        let Some(tail) = self.rooms.last_mut() else {
            return Err(TopologyError::Empty);
        };
        tail.set_north_door(north_door);
        room.set_south_door(south_door);

        tracing::debug!(
            adjective = room.adjective(),
            index = self.rooms.len(),
            "room added at north"
        );
        self.rooms.push(room);
        Ok(self.rooms.len() - 1)
    }

    /// Full scan over every existing room; room counts are map-sized.
    fn check_unique(&self, room: &Room) -> Result<(), TopologyError> {
        if self.rooms.is_empty() {
            return Err(TopologyError::Empty);
        }

        for existing in &self.rooms {
            if same_ignoring_case(existing.adjective(), room.adjective()) {
                return Err(TopologyError::DuplicateAdjective(room.adjective().to_string()));
            }
            if same_ignoring_case(existing.furnishing(), room.furnishing()) {
                return Err(TopologyError::DuplicateFurnishing(room.furnishing().to_string()));
            }
        }
        Ok(())
    }

    /// Get room by index.
    pub fn get(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    /// Find the index of the room with the given adjective (case-insensitive).
    pub fn position_of(&self, adjective: &str) -> Option<usize> {
        self.rooms
            .iter()
            .position(|room| same_ignoring_case(room.adjective(), adjective))
    }

    /// Index of the northern-most room.
    pub fn northernmost(&self) -> Option<usize> {
        self.rooms.len().checked_sub(1)
    }

    /// Check if `index` refers to a room on the map.
    pub fn contains(&self, index: usize) -> bool {
        index < self.rooms.len()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterate rooms from south to north.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }
}

impl TryFrom<Vec<Room>> for RoomRegistry {
    type Error = TopologyError;

    fn try_from(rooms: Vec<Room>) -> Result<Self, Self::Error> {
        let mut registry = RoomRegistry::new();
        let mut pending_north: Option<String> = None;

        for (index, mut room) in rooms.into_iter().enumerate() {
            let (north, south) = room.take_doors();
            if index == 0 {
                if south.is_some() {
                    return Err(TopologyError::DoorMismatch(0));
                }
                registry.add_first_room(room)?;
            } else {
                let (Some(north_label), Some(south_label)) = (pending_north.take(), south) else {
                    return Err(TopologyError::DoorMismatch(index));
                };
                registry.add_room_at_north(room, north_label, south_label)?;
            }
            pending_north = north;
        }

        // Nothing lies north of the tail
        if pending_north.is_some() {
            return Err(TopologyError::DoorMismatch(registry.len() - 1));
        }
        Ok(registry)
    }
}

impl From<RoomRegistry> for Vec<Room> {
    fn from(registry: RoomRegistry) -> Self {
        registry.rooms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Item;

    fn three_rooms() -> RoomRegistry {
        let mut registry = RoomRegistry::new();
        registry
            .add_first_room(Room::new("Small", "Quaint sofa", Item::Cream))
            .unwrap();
        registry
            .add_room_at_north(Room::new("Funny", "Sad record player", Item::None), "Magenta", "Beige")
            .unwrap();
        registry
            .add_room_at_north(Room::new("Refinanced", "Tight pizza", Item::Coffee), "Massive", "Massive")
            .unwrap();
        registry
    }

    #[test]
    fn test_add_first_room() {
        let mut registry = RoomRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.northernmost(), None);

        let index = registry
            .add_first_room(Room::new("Small", "Quaint sofa", Item::Cream))
            .unwrap();

        assert_eq!(index, 0);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.northernmost(), Some(0));
        assert!(registry.get(0).unwrap().south_door().is_none());
    }

    #[test]
    fn test_add_first_room_twice_fails() {
        let mut registry = three_rooms();
        let before = registry.clone();

        let result = registry.add_first_room(Room::new("Fake", "Fake bed", Item::None));

        assert_eq!(result, Err(TopologyError::AlreadySeeded));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_add_room_at_north_requires_first_room() {
        let mut registry = RoomRegistry::new();
        let result =
            registry.add_room_at_north(Room::new("Fake", "Fake bed", Item::None), "North", "South");

        assert_eq!(result, Err(TopologyError::Empty));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_add_room_at_north_links_doors() {
        let mut registry = three_rooms();

        let index = registry
            .add_room_at_north(Room::new("Fake", "Fake bed", Item::None), "North", "South")
            .unwrap();

        assert_eq!(index, 3);
        assert_eq!(registry.get(2).unwrap().north_door(), Some("North"));
        assert_eq!(registry.get(3).unwrap().south_door(), Some("South"));
        assert_eq!(registry.get(3).unwrap().north_door(), None);
        assert_eq!(registry.northernmost(), Some(3));
    }

    #[test]
    fn test_duplicate_furnishing_rejected_without_mutation() {
        let mut registry = three_rooms();
        let before = registry.clone();

        let result = registry.add_room_at_north(
            Room::new("Fake", "TIGHT PIZZA", Item::None),
            "North",
            "South",
        );

        assert_eq!(
            result,
            Err(TopologyError::DuplicateFurnishing("TIGHT PIZZA".to_string()))
        );
        assert_eq!(registry, before);
        assert_eq!(registry.get(2).unwrap().north_door(), None);
    }

    #[test]
    fn test_duplicate_adjective_anywhere_rejected() {
        let mut registry = three_rooms();
        let before = registry.clone();

        // Collides with the southern-most room, not the tail
        let result =
            registry.add_room_at_north(Room::new("small", "Fake bed", Item::None), "North", "South");

        assert_eq!(result, Err(TopologyError::DuplicateAdjective("small".to_string())));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_position_of() {
        let registry = three_rooms();
        assert_eq!(registry.position_of("funny"), Some(1));
        assert_eq!(registry.position_of("Rough"), None);
        assert!(registry.contains(2));
        assert!(!registry.contains(3));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_rooms() {
        let source = r#"[
            { "adjective": "Small", "furnishing": "Sofa" },
            { "adjective": "SMALL", "furnishing": "sofa", "north_door": "X" }
        ]"#;

        assert!(serde_json::from_str::<RoomRegistry>(source).is_err());
    }

    #[test]
    fn test_deserialize_rejects_dangling_doors() {
        // North door on the tail with nothing beyond it
        let dangling_north = r#"[
            { "adjective": "Small", "furnishing": "Sofa", "north_door": "X" }
        ]"#;
        assert!(serde_json::from_str::<RoomRegistry>(dangling_north).is_err());

        // Second room without a way back south
        let missing_south = r#"[
            { "adjective": "Small", "furnishing": "Sofa", "north_door": "X" },
            { "adjective": "Big", "furnishing": "Bed" }
        ]"#;
        assert!(serde_json::from_str::<RoomRegistry>(missing_south).is_err());

        let rooms = vec![
            Room::new("Small", "Sofa", Item::None),
            Room::new("Big", "Bed", Item::None),
        ];
        assert_eq!(
            RoomRegistry::try_from(rooms),
            Err(TopologyError::DoorMismatch(1))
        );
    }

    #[test]
    fn test_serialized_registry_loads_back() {
        let registry = three_rooms();
        let json = serde_json::to_string(&registry).unwrap();

        let loaded: RoomRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, registry);
        assert_eq!(loaded.get(1).unwrap().north_door(), Some("Massive"));
    }

    #[test]
    fn test_iter_runs_south_to_north() {
        let registry = three_rooms();
        let names: Vec<_> = registry.iter().map(Room::adjective).collect();
        assert_eq!(names, vec!["Small", "Funny", "Refinanced"]);
    }
}
