//! Session events - a record of what each command did.

use quest_rules::{DrinkOutcome, Item};
use serde::{Deserialize, Serialize};

/// Compass direction of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
}

/// Something that happened during a session, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    Moved {
        from: usize,
        to: usize,
    },
    DoorMissing {
        direction: Direction,
    },
    /// `room` is `None` when looking around before the position was set.
    Looked {
        room: Option<usize>,
        item: Item,
    },
    InventoryShown,
    Drank {
        outcome: DrinkOutcome,
    },
    HelpShown,
    Unknown {
        input: String,
    },
}

impl SessionEvent {
    /// Check if this event ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionEvent::Drank { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event = SessionEvent::Moved { from: 3, to: 4 };
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "moved");
        assert_eq!(json["from"], 3);
        assert_eq!(json["to"], 4);
    }

    #[test]
    fn test_drank_is_terminal() {
        let drank = SessionEvent::Drank {
            outcome: DrinkOutcome::new(true, true, true),
        };
        assert!(drank.is_terminal());
        assert!(!SessionEvent::HelpShown.is_terminal());
    }
}
