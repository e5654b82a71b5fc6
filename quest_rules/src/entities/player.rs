//! The player capability and the stock inventory that implements it.

use serde::{Deserialize, Serialize};

use super::Item;

/// What the game needs from a player.
///
/// The session only ever talks to the player through these operations and
/// never inspects how the inventory is stored.
pub trait Player {
    fn has_coffee(&self) -> bool;
    fn has_cream(&self) -> bool;
    fn has_sugar(&self) -> bool;

    /// Hand an item to the player. `Item::None` is passed through as well.
    fn add_item(&mut self, item: Item);

    /// Human-readable summary of what the player is carrying.
    fn inventory_string(&self) -> String;

    /// Check possession of a single item kind.
    fn has(&self, item: Item) -> bool {
        match item {
            Item::Coffee => self.has_coffee(),
            Item::Cream => self.has_cream(),
            Item::Sugar => self.has_sugar(),
            Item::None => false,
        }
    }
}

/// A player that simply remembers which ingredients were picked up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub coffee: bool,
    pub cream: bool,
    pub sugar: bool,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Player for Inventory {
    fn has_coffee(&self) -> bool {
        self.coffee
    }

    fn has_cream(&self) -> bool {
        self.cream
    }

    fn has_sugar(&self) -> bool {
        self.sugar
    }

    fn add_item(&mut self, item: Item) {
        match item {
            Item::Coffee => self.coffee = true,
            Item::Cream => self.cream = true,
            Item::Sugar => self.sugar = true,
            Item::None => {}
        }
    }

    fn inventory_string(&self) -> String {
        let mut text = String::new();
        text.push_str(if self.coffee {
            "You have a cup of delicious coffee.\n"
        } else {
            "YOU HAVE NO COFFEE!\n"
        });
        text.push_str(if self.cream {
            "You have some fresh cream.\n"
        } else {
            "YOU HAVE NO CREAM!\n"
        });
        text.push_str(if self.sugar {
            "You have some tasty sugar.\n"
        } else {
            "YOU HAVE NO SUGAR!\n"
        });
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inventory_string() {
        let inventory = Inventory::new();
        assert_eq!(
            inventory.inventory_string(),
            "YOU HAVE NO COFFEE!\nYOU HAVE NO CREAM!\nYOU HAVE NO SUGAR!\n"
        );
    }

    #[test]
    fn test_add_items() {
        let mut inventory = Inventory::new();
        inventory.add_item(Item::Coffee);
        inventory.add_item(Item::None);
        inventory.add_item(Item::Sugar);

        assert!(inventory.has(Item::Coffee));
        assert!(!inventory.has(Item::Cream));
        assert!(inventory.has(Item::Sugar));
        assert!(!inventory.has(Item::None));
        assert_eq!(
            inventory.inventory_string(),
            "You have a cup of delicious coffee.\nYOU HAVE NO CREAM!\nYou have some tasty sugar.\n"
        );
    }

    #[test]
    fn test_repeated_pickups_collect_everything() {
        let mut inventory = Inventory::new();
        for item in [Item::Cream, Item::Coffee, Item::Sugar, Item::Cream] {
            inventory.add_item(item);
        }
        assert_eq!(
            inventory,
            Inventory {
                coffee: true,
                cream: true,
                sugar: true
            }
        );
    }
}
