//! Game session - the state machine driven by player commands.
//!
//! A session moves through three states:
//! 1. **Unplaced**: the map may exist but the player has no position yet
//! 2. **Placed**: the player stands in one of the rooms and can move, look around,
//!    and check the inventory
//! 3. **Over**: the drink has been taken; this happens whatever the outcome
//!
//! Every command is answered with a response string. Invalid moves and unknown
//! input are ordinary responses, never errors.

use quest_rules::{
    look_message, DrinkOutcome, Item, Player, Room, RoomRegistry, TopologyError, DOOR_MISSING,
    HELP_TEXT, INSTRUCTIONS, UNKNOWN_COMMAND,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::command::Command;
use crate::events::{Direction, SessionEvent};

/// Unique identifier for a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from placing the player or editing the map through a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no room at index {0}")]
    UnknownRoom(usize),

    #[error("no room called {0:?}")]
    UnknownAdjective(String),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// A single play-through of the quest.
#[derive(Debug)]
pub struct GameSession<P: Player> {
    id: SessionId,
    registry: RoomRegistry,
    player: P,
    /// Always a valid index into `registry` when set.
    current: Option<usize>,
    drank: bool,
    events: Vec<SessionEvent>,
}

impl<P: Player> GameSession<P> {
    /// Create a session over a prebuilt map. The player has no position
    /// until `set_current_room` is called.
    pub fn new(registry: RoomRegistry, player: P) -> Self {
        let id = SessionId::new();
        tracing::debug!(session = %id, rooms = registry.len(), "session created");
        Self {
            id,
            registry,
            player,
            current: None,
            drank: false,
            events: Vec::new(),
        }
    }

    /// Create a session with no rooms; build the map with `add_first_room`
    /// and `add_room_at_north`.
    pub fn empty(player: P) -> Self {
        Self::new(RoomRegistry::new(), player)
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Add the southern-most room and place the player in it.
    pub fn add_first_room(&mut self, room: Room) -> Result<(), SessionError> {
        let index = self.registry.add_first_room(room)?;
        self.current = Some(index);
        Ok(())
    }

    /// Attach a room north of the current northern-most room.
    pub fn add_room_at_north(
        &mut self,
        room: Room,
        north_door: impl Into<String>,
        south_door: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.registry.add_room_at_north(room, north_door, south_door)?;
        Ok(())
    }

    /// The room the player is standing in, if placed.
    pub fn current_room(&self) -> Option<&Room> {
        self.current.and_then(|index| self.registry.get(index))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Place the player in the room at `index`. Unknown indices leave the
    /// position unchanged.
    pub fn set_current_room(&mut self, index: usize) -> Result<(), SessionError> {
        if !self.registry.contains(index) {
            tracing::warn!(session = %self.id, index, "cannot place player: unknown room");
            return Err(SessionError::UnknownRoom(index));
        }
        self.current = Some(index);
        Ok(())
    }

    /// Place the player in the room with the given adjective (case-insensitive).
    pub fn set_current_room_by_adjective(&mut self, adjective: &str) -> Result<(), SessionError> {
        let index = self
            .registry
            .position_of(adjective)
            .ok_or_else(|| SessionError::UnknownAdjective(adjective.to_string()))?;
        self.set_current_room(index)
    }

    /// The command prompt.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    /// Run one player command and return the response.
    pub fn process_command(&mut self, input: &str) -> String {
        match Command::parse(input) {
            Some(Command::North) => self.move_north(),
            Some(Command::South) => self.move_south(),
            Some(Command::Look) => self.look(),
            Some(Command::Inventory) => self.inventory(),
            Some(Command::Drink) => self.drink(),
            Some(Command::Help) => self.help(),
            None => {
                tracing::debug!(session = %self.id, input, "unknown command");
                self.events.push(SessionEvent::Unknown {
                    input: input.to_string(),
                });
                UNKNOWN_COMMAND.to_string()
            }
        }
    }

    /// Step through the north door. Succeeds with an empty response.
    pub fn move_north(&mut self) -> String {
        let target = match (self.current, self.registry.northernmost()) {
            (Some(index), Some(last)) if index < last => index + 1,
            _ => return self.door_missing(Direction::North),
        };
        self.move_to(target)
    }

    /// Step through the south door. Succeeds with an empty response.
    pub fn move_south(&mut self) -> String {
        let target = match self.current {
            Some(index) if index > 0 => index - 1,
            _ => return self.door_missing(Direction::South),
        };
        self.move_to(target)
    }

    fn move_to(&mut self, target: usize) -> String {
        let from = self.current.unwrap_or_default();
        tracing::debug!(session = %self.id, from, to = target, "player moved");
        self.current = Some(target);
        self.events.push(SessionEvent::Moved { from, to: target });
        String::new()
    }

    fn door_missing(&mut self, direction: Direction) -> String {
        tracing::debug!(session = %self.id, ?direction, "no door");
        self.events.push(SessionEvent::DoorMissing { direction });
        DOOR_MISSING.to_string()
    }

    /// Look around the current room.
    ///
    /// Whatever the room holds is handed to the player every time, including
    /// `Item::None` and items already picked up.
    pub fn look(&mut self) -> String {
        let item = match self.current_room() {
            Some(room) => room.item(),
            None => {
                tracing::warn!(session = %self.id, "look before the player was placed");
                self.events.push(SessionEvent::Looked {
                    room: None,
                    item: Item::None,
                });
                return look_message(Item::None).to_string();
            }
        };

        self.player.add_item(item);
        tracing::debug!(session = %self.id, %item, "looked around");
        self.events.push(SessionEvent::Looked {
            room: self.current,
            item,
        });
        look_message(item).to_string()
    }

    /// The player's inventory summary, verbatim.
    pub fn inventory(&mut self) -> String {
        self.events.push(SessionEvent::InventoryShown);
        self.player.inventory_string()
    }

    /// Drink the mixture. Ends the game whether or not it is a win.
    pub fn drink(&mut self) -> String {
        self.drank = true;
        let outcome = DrinkOutcome::from_player(&self.player);
        tracing::info!(session = %self.id, win = outcome.is_win(), "game over");
        self.events.push(SessionEvent::Drank { outcome });
        outcome.message().to_string()
    }

    pub fn help(&mut self) -> String {
        self.events.push(SessionEvent::HelpShown);
        HELP_TEXT.to_string()
    }

    /// True once the drink has been taken.
    pub fn is_game_over(&self) -> bool {
        self.drank
    }

    /// Check if the player is carrying all three ingredients.
    pub fn full_inventory(&self) -> bool {
        self.player.has_coffee() && self.player.has_cream() && self.player.has_sugar()
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    /// Everything that happened so far, oldest first.
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }
}
