//! Movement and push resolution.
//!
//! ## Pushing
//!
//! A robot moving into an occupied cell pushes the occupant ahead of it,
//! and that occupant pushes the next one, and so on. The whole chain is
//! planned before anything moves:
//!
//! 1. Walk from the pushed robot in the pusher's heading, recording
//!    `(robot, destination)` for every robot in the chain.
//! 2. Any wall on the way, or a chain that wraps back onto the pusher,
//!    fails the push with `MoveError::Impossible` and nothing moves.
//! 3. Otherwise commit tail-first: the far end moves into the free cell,
//!    each predecessor slides into the cell just vacated, and finally the
//!    pusher takes the first pushed robot's old cell.
//!
//! No two robots ever share a cell, even mid-commit.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::trace;

use crate::board::Board;
use crate::core::{Heading, MoveError, Player, PlayerId, Position};

/// Robots in a push chain and where each one ends up.
type PushPlan = SmallVec<[(PlayerId, Position); 8]>;

/// Translates and rotates robots on a board.
pub struct MovementResolver;

impl MovementResolver {
    fn placement(board: &Board, player: PlayerId) -> Option<(Position, Heading)> {
        let player = board.player(player)?;
        Some((player.position()?, player.heading()))
    }

    /// Move `player` one cell ahead, pushing any robots in the way.
    ///
    /// Returns false (and changes nothing) if a wall blocks the crossing,
    /// if the robots ahead cannot be pushed, or if the player is not on
    /// the board.
    pub fn move_forward(board: &mut Board, player: PlayerId) -> bool {
        let Some((from, heading)) = Self::placement(board, player) else {
            return false;
        };
        let to = board.neighbor(from, heading);

        if !board.can_cross(from, to, heading) {
            trace!(player = %player, %from, %heading, "forward move blocked by wall");
            return false;
        }

        match board.player_at(to) {
            // Wrapped onto itself on a one-cell-long axis
            Some(occupant) if occupant == player => false,
            Some(occupant) => match Self::push(board, player, occupant) {
                Ok(()) => true,
                Err(err) => {
                    trace!(%err, "forward move abandoned");
                    false
                }
            },
            None => {
                board.relocate(player, to);
                true
            }
        }
    }

    /// Push `pushed` one cell in `pusher`'s heading, along with every robot
    /// behind it, and move `pusher` into the vacated cell.
    ///
    /// Either the whole chain moves or nothing does.
    pub fn push(board: &mut Board, pusher: PlayerId, pushed: PlayerId) -> Result<(), MoveError> {
        let Some((_, heading)) = Self::placement(board, pusher) else {
            return Ok(());
        };
        let Some(origin) = board.player(pushed).and_then(Player::position) else {
            return Ok(());
        };

        let plan = Self::plan_push(board, pusher, pushed, origin, heading)?;

        for &(robot, destination) in plan.iter().rev() {
            board.relocate(robot, destination);
        }
        board.relocate(pusher, origin);
        Ok(())
    }

    fn plan_push(
        board: &Board,
        pusher: PlayerId,
        pushed: PlayerId,
        origin: Position,
        heading: Heading,
    ) -> Result<PushPlan, MoveError> {
        let impossible = |position| MoveError::Impossible {
            player: pusher,
            position,
            heading,
        };

        let mut plan = PushPlan::new();
        let mut seen = FxHashSet::default();
        seen.insert(pusher);

        let (mut robot, mut at) = (pushed, origin);
        loop {
            if !seen.insert(robot) {
                trace!(%pusher, %at, "push chain wraps onto itself");
                return Err(impossible(at));
            }

            let destination = board.neighbor(at, heading);
            if !board.can_cross(at, destination, heading) {
                trace!(%pusher, blocked = %robot, %at, "push blocked by wall");
                return Err(impossible(at));
            }
            plan.push((robot, destination));

            match board.player_at(destination) {
                Some(next) => {
                    robot = next;
                    at = destination;
                }
                None => return Ok(plan),
            }
        }
    }

    /// Move ahead twice. A blocked first hop does not stop the second
    /// attempt from being made; each hop is an independent `move_forward`.
    ///
    /// Returns the number of cells moved.
    pub fn fast_forward(board: &mut Board, player: PlayerId) -> usize {
        let mut moved = 0;
        for _ in 0..2 {
            if Self::move_forward(board, player) {
                moved += 1;
            }
        }
        moved
    }

    fn rotate(board: &mut Board, player: PlayerId, turn: fn(Heading) -> Heading) -> bool {
        let Some(heading) = board.player(player).map(Player::heading) else {
            return false;
        };
        board.set_heading(player, turn(heading)).is_ok()
    }

    /// Rotate clockwise. Never blocked.
    pub fn turn_right(board: &mut Board, player: PlayerId) -> bool {
        Self::rotate(board, player, Heading::next)
    }

    /// Rotate counter-clockwise. Never blocked.
    pub fn turn_left(board: &mut Board, player: PlayerId) -> bool {
        Self::rotate(board, player, Heading::prev)
    }

    /// Two right turns.
    pub fn u_turn(board: &mut Board, player: PlayerId) -> bool {
        Self::turn_right(board, player) && Self::turn_right(board, player)
    }
}
