//! Keyboard and button input mapped onto placement session commands.

use battleships_types::Direction;
use serde::{Deserialize, Serialize};

/// One user action on a [`PlacementSession`](crate::PlacementSession)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlacementCommand {
    Select(u8),
    Move(Direction),
    Rotate,
    Commit,
    DiscardAll,
}

impl PlacementCommand {
    /// Maps a DOM `KeyboardEvent.key` value: arrows move, space rotates,
    /// `Enter` commits and `Escape` starts over.
    pub fn from_key(key: &str) -> Option<PlacementCommand> {
        let command = match key {
            "ArrowUp" => PlacementCommand::Move(Direction::Up),
            "ArrowDown" => PlacementCommand::Move(Direction::Down),
            "ArrowLeft" => PlacementCommand::Move(Direction::Left),
            "ArrowRight" => PlacementCommand::Move(Direction::Right),
            " " => PlacementCommand::Rotate,
            "Enter" => PlacementCommand::Commit,
            "Escape" => PlacementCommand::DiscardAll,
            _ => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_browser_keys() {
        assert_eq!(
            PlacementCommand::from_key("ArrowLeft"),
            Some(PlacementCommand::Move(Direction::Left))
        );
        assert_eq!(PlacementCommand::from_key(" "), Some(PlacementCommand::Rotate));
        assert_eq!(PlacementCommand::from_key("Enter"), Some(PlacementCommand::Commit));
        assert_eq!(PlacementCommand::from_key("a"), None);
    }
}
