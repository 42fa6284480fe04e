//! Command dispatch.
//!
//! Maps a programmed command onto movement primitives. Interactive
//! commands do nothing here: the controller resolves them into one of
//! their options first and executes that instead.

use crate::board::Board;
use crate::cards::Command;
use crate::core::PlayerId;

use super::movement::MovementResolver;

/// Executes commands for a player.
pub struct CommandExecutor;

impl CommandExecutor {
    /// Run `command` for `player`. Returns whether the board changed.
    pub fn execute(board: &mut Board, player: PlayerId, command: Command) -> bool {
        match command {
            Command::Forward => MovementResolver::move_forward(board, player),
            Command::Right => MovementResolver::turn_right(board, player),
            Command::Left => MovementResolver::turn_left(board, player),
            Command::FastForward => MovementResolver::fast_forward(board, player) > 0,
            Command::UTurn => MovementResolver::u_turn(board, player),
            Command::LeftOrRight => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Heading, Position};

    fn setup() -> (Board, PlayerId) {
        let mut board = Board::new(&GameConfig::new(8, 8)).unwrap();
        let id = board.add_player("Alice", "red").unwrap();
        board.place_player(id, 4, 4).unwrap();
        board.set_heading(id, Heading::North).unwrap();
        (board, id)
    }

    fn state(board: &Board, id: PlayerId) -> (Position, Heading) {
        let player = board.player(id).unwrap();
        (player.position().unwrap(), player.heading())
    }

    #[test]
    fn test_dispatch_table() {
        let cases = [
            (Command::Forward, (Position::new(4, 3), Heading::North)),
            (Command::Right, (Position::new(4, 4), Heading::East)),
            (Command::Left, (Position::new(4, 4), Heading::West)),
            (Command::FastForward, (Position::new(4, 2), Heading::North)),
            (Command::UTurn, (Position::new(4, 4), Heading::South)),
        ];

        for (command, expected) in cases {
            let (mut board, id) = setup();
            assert!(CommandExecutor::execute(&mut board, id, command), "{command}");
            assert_eq!(state(&board, id), expected, "{command}");
        }
    }

    #[test]
    fn test_interactive_command_is_noop() {
        let (mut board, id) = setup();
        board.take_events();

        assert!(!CommandExecutor::execute(&mut board, id, Command::LeftOrRight));
        assert_eq!(state(&board, id), (Position::new(4, 4), Heading::North));
        assert!(board.take_events().is_empty());
    }
}
