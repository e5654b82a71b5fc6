//! Player commands.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The single-letter instructions a player can give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    North,
    South,
    Look,
    Inventory,
    Drink,
    Help,
}

impl Command {
    /// Parse a command, ignoring case. Only a trailing line ending is
    /// stripped; any other whitespace makes the input unknown.
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim_end_matches(&['\r', '\n'][..]).chars();
        let letter = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        match letter.to_ascii_uppercase() {
            'N' => Some(Command::North),
            'S' => Some(Command::South),
            'L' => Some(Command::Look),
            'I' => Some(Command::Inventory),
            'D' => Some(Command::Drink),
            'H' => Some(Command::Help),
            _ => None,
        }
    }

    /// The letter that triggers this command.
    pub fn letter(&self) -> char {
        match self {
            Command::North => 'N',
            Command::South => 'S',
            Command::Look => 'L',
            Command::Inventory => 'I',
            Command::Drink => 'D',
            Command::Help => 'H',
        }
    }
}

/// Input that is not one of the known command letters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Command::parse("n"), Some(Command::North));
        assert_eq!(Command::parse("N"), Some(Command::North));
        assert_eq!(Command::parse("d"), Some(Command::Drink));
        assert_eq!(Command::parse("h\r\n"), Some(Command::Help));
    }

    #[test]
    fn test_parse_keeps_surrounding_spaces() {
        assert_eq!(Command::parse(" n"), None);
        assert_eq!(Command::parse(" n "), None);
        assert_eq!(Command::parse("n "), None);
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("x"), None);
        assert_eq!(Command::parse("north"), None);
        assert_eq!(Command::parse("NS"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("l".parse::<Command>(), Ok(Command::Look));
        assert_eq!(
            "zz".parse::<Command>(),
            Err(UnknownCommand("zz".to_string()))
        );
    }

    #[test]
    fn test_letter_round_trips() {
        for command in [
            Command::North,
            Command::South,
            Command::Look,
            Command::Inventory,
            Command::Drink,
            Command::Help,
        ] {
            assert_eq!(Command::parse(&command.to_string()), Some(command));
        }
    }
}
