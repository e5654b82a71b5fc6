//! Game mechanics: fixed responses, what looking around turns up, and how
//! the final drink resolves.

use serde::{Deserialize, Serialize};

use crate::entities::{Item, Player};

/// Command prompt shown before every instruction.
pub const INSTRUCTIONS: &str = " INSTRUCTIONS (N,S,L,I,D,H) > ";

/// Response to moving through a door that is not there.
pub const DOOR_MISSING: &str = "A door in that direction does not exist.\n";

/// Response to anything that is not a command.
pub const UNKNOWN_COMMAND: &str = "What?\n";

pub const HELP_TEXT: &str = "N - Moves the player north if there is an available room.\n\
S - Moves the player south if there is an available room.\n\
L - Look for items in your current room.\n\
I - Access your inventory of items currently possessed.\n\
D - Drink the mixture to decide the fate of your quest...\n\
H - Help\n";

/// What the player is told after looking around a room holding `item`.
pub fn look_message(item: Item) -> &'static str {
    match item {
        Item::Coffee => "There might be something here...\nYou have found a delicious cup of coffee.",
        Item::Cream => "There might be something here...\nYou found some creamy cream!\n",
        Item::Sugar => "You have found some sugar cubes.",
        Item::None => "You have found nothing!",
    }
}

/// The result of drinking whatever the player has mixed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkOutcome {
    pub has_coffee: bool,
    pub has_cream: bool,
    pub has_sugar: bool,
}

impl DrinkOutcome {
    /// Create an outcome from the three possession flags.
    pub fn new(has_coffee: bool, has_cream: bool, has_sugar: bool) -> Self {
        Self {
            has_coffee,
            has_cream,
            has_sugar,
        }
    }

    /// Ask the player what they are carrying.
    pub fn from_player<P: Player + ?Sized>(player: &P) -> Self {
        Self::new(player.has_coffee(), player.has_cream(), player.has_sugar())
    }

    /// The drink is only a win with all three ingredients.
    pub fn is_win(&self) -> bool {
        self.has_coffee && self.has_cream && self.has_sugar
    }

    /// Final message for this combination of ingredients.
    pub fn message(&self) -> &'static str {
        match (self.has_coffee, self.has_cream, self.has_sugar) {
            (true, true, true) => "You have a cup of delicious coffee.\nYou have some fresh cream.\nYou have some tasty sugar.\n\nYou drink the beverage and are ready to study!\nYou win!\n",
            (false, false, false) => "YOU HAVE NO COFFEE!\nYOU HAVE NO CREAM!\nYOU HAVE NO SUGAR!\n\nYou drink the air, as you have no coffee, sugar, or cream.\nThe air is invigorating, but not invigorating enough. You cannot study.\nYou lose!\n",
            (false, false, true) => "YOU HAVE NO COFFEE!\nYOU HAVE NO CREAM!\nYou have some tasty sugar.\n\nYou drink the air, as you have no coffee, or cream.\nThe air is invigorating, but not invigorating enough. You cannot study.\nYou lose!\n",
            (false, true, false) => "YOU HAVE NO COFFEE!\nYou have some fresh cream.\nYOU HAVE NO SUGAR!\n\nYou drink the air, as you have no coffee, or sugar.\nThe air is invigorating, but not invigorating enough. You cannot study.\nYou lose!\n",
            (true, false, false) => "You have a cup of delicious coffee.\nYOU HAVE NO CREAM!\nYOU HAVE NO SUGAR!\n\nYou drink the air, as you have no sugar, or cream.\nThe air is invigorating, but not invigorating enough. You cannot study.\nYou lose!\n",
            (true, true, false) => "You have a cup of delicious coffee.\nYou have some fresh cream.\nYOU HAVE NO SUGAR!\n\nYou drink the air, as you have no sugar.\nThe air is invigorating, but not invigorating enough. You cannot study.\nYou lose!\n",
            (true, false, true) => "You have a cup of delicious coffee.\nYOU HAVE NO CREAM!\nYou have some tasty sugar.\n\nYou drink the air, as you have no cream.\nThe air is invigorating, but not invigorating enough. You cannot study.\nYou lose!\n",
            // Trailing space after "coffee." is part of the published text
            (false, true, true) => "YOU HAVE NO COFFEE!\nYou have some fresh cream.\nYou have some tasty sugar.\n\nYou drink the air, as you have no coffee. \nThe air is invigorating, but not invigorating enough. You cannot study.\nYou lose!\n",
        }
    }
}
