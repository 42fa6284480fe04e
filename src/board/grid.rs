//! The board: grid, players and turn bookkeeping.
//!
//! ## Grid
//!
//! Cells are stored row-major in an `im::Vector`, so cloning a board for a
//! snapshot or a what-if simulation is O(1). The grid wraps in both
//! directions: every cell has four neighbours and walls are the only thing
//! that stops a robot.
//!
//! ## Notification
//!
//! Every setter records a `BoardEvent` in the board's outbox when it
//! actually changes something. The controller drains the outbox into its
//! sink; code driving a bare `Board` can call `take_events` itself.

use im::Vector;
use tracing::debug;

use super::cell::Cell;
use super::layout::BoardLayout;
use crate::cards::{CardSlot, CommandCard, SlotRef};
use crate::core::{
    ConfigError, EngineError, GameConfig, Heading, Phase, Player, PlayerId, Position,
};
use crate::events::BoardEvent;

/// Game board state.
#[derive(Clone, Debug)]
pub struct Board {
    name: String,
    width: u32,
    height: u32,
    register_count: usize,
    hand_size: usize,
    game_id: Option<u64>,

    cells: Vector<Cell>,

    /// Turn order is insertion order.
    players: Vec<Player>,
    current: Option<PlayerId>,

    phase: Phase,
    step: usize,
    step_mode: bool,
    counter: u32,

    outbox: Vec<BoardEvent>,
}

impl Board {
    /// Create a wall-free board.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (width, height) = (config.width, config.height);
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(Position::new(x, y))))
            .collect();

        Ok(Self {
            name: config.board_name.clone(),
            width,
            height,
            register_count: config.register_count,
            hand_size: config.hand_size,
            game_id: None,
            cells,
            players: Vec::new(),
            current: None,
            phase: Phase::Initialisation,
            step: 0,
            step_mode: false,
            counter: 0,
            outbox: Vec::new(),
        })
    }

    /// Create a board from a layout. Name, extent and walls come from the
    /// layout; slot counts from `config`.
    ///
    /// Walls loaded here are part of the initial board and are not
    /// reported as events.
    pub fn from_layout(layout: &BoardLayout, config: &GameConfig) -> Result<Self, EngineError> {
        let config = GameConfig {
            board_name: layout.name.clone(),
            width: layout.width,
            height: layout.height,
            ..config.clone()
        };
        let mut board = Self::new(&config)?;

        for wall in &layout.walls {
            let index = board.index_of(wall.x, wall.y)?;
            if let Some(cell) = board.cells.get_mut(index) {
                cell.add_wall(wall.heading);
            }
        }

        Ok(board)
    }

    // === Identity ===

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn register_count(&self) -> usize {
        self.register_count
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    #[must_use]
    pub fn game_id(&self) -> Option<u64> {
        self.game_id
    }

    /// Assign the game id. Once set it may be re-asserted but never changed.
    pub fn set_game_id(&mut self, game_id: u64) -> Result<(), EngineError> {
        match self.game_id {
            None => {
                self.game_id = Some(game_id);
                self.emit(BoardEvent::GameIdAssigned { game_id });
                Ok(())
            }
            Some(current) if current == game_id => Ok(()),
            Some(current) => Err(EngineError::GameIdAlreadySet {
                current,
                requested: game_id,
            }),
        }
    }

    // === Grid ===

    fn index_of(&self, x: u32, y: u32) -> Result<usize, EngineError> {
        if x < self.width && y < self.height {
            Ok(y as usize * self.width as usize + x as usize)
        } else {
            Err(EngineError::OutOfBounds { x, y })
        }
    }

    fn raw_index(&self, position: Position) -> usize {
        position.y as usize * self.width as usize + position.x as usize
    }

    /// Is `position` on the board?
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    /// Cell at (`x`, `y`), `None` outside the board.
    #[must_use]
    pub fn cell(&self, x: u32, y: u32) -> Option<&Cell> {
        self.index_of(x, y).ok().and_then(|i| self.cells.get(i))
    }

    #[must_use]
    pub fn cell_at(&self, position: Position) -> Option<&Cell> {
        self.cell(position.x, position.y)
    }

    /// Iterate over all cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The adjacent cell in `heading`, wrapping at the edges.
    ///
    /// Walls are not consulted; see `can_cross`.
    #[must_use]
    pub fn neighbor(&self, position: Position, heading: Heading) -> Position {
        let Position { x, y } = position;
        let (width, height) = (self.width, self.height);
        match heading {
            Heading::North => Position::new(x, (y + height - 1) % height),
            Heading::South => Position::new(x, (y + 1) % height),
            Heading::West => Position::new((x + width - 1) % width, y),
            Heading::East => Position::new((x + 1) % width, y),
        }
    }

    /// Can a robot cross from `from` into the adjacent `to` moving `heading`?
    ///
    /// Requires no wall on `from`'s `heading` edge and no wall on `to`'s
    /// opposite edge.
    #[must_use]
    pub fn can_cross(&self, from: Position, to: Position, heading: Heading) -> bool {
        let leaves = self.cell_at(from).is_some_and(|c| !c.has_wall(heading));
        let enters = self
            .cell_at(to)
            .is_some_and(|c| !c.has_wall(heading.opposite()));
        leaves && enters
    }

    /// Add a wall on the `heading` edge of cell (`x`, `y`).
    pub fn add_wall(&mut self, x: u32, y: u32, heading: Heading) -> Result<(), EngineError> {
        let index = self.index_of(x, y)?;
        let added = self
            .cells
            .get_mut(index)
            .is_some_and(|cell| cell.add_wall(heading));
        if added {
            self.emit(BoardEvent::WallAdded {
                position: Position::new(x, y),
                heading,
            });
        }
        Ok(())
    }

    // === Players ===

    /// Add a player at the end of the turn order.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<PlayerId, EngineError> {
        let index = u8::try_from(self.players.len()).map_err(|_| EngineError::TooManyPlayers)?;
        let id = PlayerId::new(index);
        self.players.push(Player::new(
            id,
            name,
            color,
            self.register_count,
            self.hand_size,
        ));
        self.emit(BoardEvent::PlayerAdded { player: id });
        Ok(id)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, EngineError> {
        self.players
            .get_mut(id.index())
            .ok_or(EngineError::UnknownPlayer(id))
    }

    /// Player `n` in turn order.
    #[must_use]
    pub fn player_by_number(&self, n: usize) -> Option<PlayerId> {
        self.players.get(n).map(Player::id)
    }

    /// Position of `id` in turn order.
    #[must_use]
    pub fn player_number(&self, id: PlayerId) -> Option<usize> {
        self.player(id).map(|p| p.id().index())
    }

    /// Player standing on `position`.
    #[must_use]
    pub fn player_at(&self, position: Position) -> Option<PlayerId> {
        self.cell_at(position).and_then(Cell::occupant)
    }

    /// Put a player on an empty cell, taking it off its previous cell.
    pub fn place_player(&mut self, id: PlayerId, x: u32, y: u32) -> Result<(), EngineError> {
        let target = self.index_of(x, y)?;
        let position = Position::new(x, y);
        let previous = self
            .player(id)
            .ok_or(EngineError::UnknownPlayer(id))?
            .position();

        match self.player_at(position) {
            Some(other) if other == id => return Ok(()),
            Some(_) => return Err(EngineError::CellOccupied(position)),
            None => {}
        }

        if let Some(old) = previous {
            let index = self.index_of(old.x, old.y)?;
            if let Some(cell) = self.cells.get_mut(index) {
                cell.set_occupant(None);
            }
        }
        if let Some(cell) = self.cells.get_mut(target) {
            cell.set_occupant(Some(id));
        }
        self.player_mut(id)?.set_position(Some(position));
        self.emit(BoardEvent::PlayerPlaced { player: id, position });
        Ok(())
    }

    /// Turn a player to face `heading`.
    pub fn set_heading(&mut self, id: PlayerId, heading: Heading) -> Result<(), EngineError> {
        let player = self.player_mut(id)?;
        if player.heading() != heading {
            player.set_heading(heading);
            self.emit(BoardEvent::HeadingChanged { player: id, heading });
        }
        Ok(())
    }

    /// Move a placed player onto `to`.
    ///
    /// The caller guarantees `to` is on the board and empty; both occupant
    /// references and the player's position change together.
    pub(crate) fn relocate(&mut self, id: PlayerId, to: Position) {
        let Some(from) = self.player(id).and_then(Player::position) else {
            debug_assert!(false, "relocating unplaced {id}");
            return;
        };
        debug_assert!(self.contains(to), "relocating off the board to {to}");
        debug_assert!(self.player_at(to).is_none(), "relocating onto occupied cell {to}");

        let (from_index, to_index) = (self.raw_index(from), self.raw_index(to));
        if let Some(cell) = self.cells.get_mut(from_index) {
            cell.set_occupant(None);
        }
        if let Some(cell) = self.cells.get_mut(to_index) {
            cell.set_occupant(Some(id));
        }
        if let Some(player) = self.players.get_mut(id.index()) {
            player.set_position(Some(to));
        }

        debug!(player = %id, %from, %to, "player moved");
        self.emit(BoardEvent::PlayerMoved { player: id, from, to });
    }

    // === Card slots ===

    /// Look up one slot of a player.
    pub fn slot(&self, id: PlayerId, slot: SlotRef) -> Result<&CardSlot, EngineError> {
        self.player(id)
            .ok_or(EngineError::UnknownPlayer(id))?
            .slot(slot)
            .ok_or(EngineError::SlotOutOfRange { player: id, slot })
    }

    fn slot_mut(&mut self, id: PlayerId, slot: SlotRef) -> Result<&mut CardSlot, EngineError> {
        self.player_mut(id)?
            .slot_mut(slot)
            .ok_or(EngineError::SlotOutOfRange { player: id, slot })
    }

    /// Store `card` in a slot, returning the card it replaced.
    pub fn set_slot_card(
        &mut self,
        id: PlayerId,
        slot: SlotRef,
        card: Option<CommandCard>,
    ) -> Result<Option<CommandCard>, EngineError> {
        let target = self.slot_mut(id, slot)?;
        let changed = target.card() != card.as_ref();
        let previous = target.replace(card);
        if changed {
            self.emit(BoardEvent::SlotChanged { player: id, slot });
        }
        Ok(previous)
    }

    /// Show or hide a slot.
    pub fn set_slot_visible(
        &mut self,
        id: PlayerId,
        slot: SlotRef,
        visible: bool,
    ) -> Result<(), EngineError> {
        if self.slot_mut(id, slot)?.set_visible(visible) {
            self.emit(BoardEvent::SlotChanged { player: id, slot });
        }
        Ok(())
    }

    /// Move a card between two slots of the same player.
    ///
    /// Succeeds only if `from` holds a card and `to` is empty; returns
    /// whether the card moved.
    pub fn move_card(&mut self, id: PlayerId, from: SlotRef, to: SlotRef) -> Result<bool, EngineError> {
        if self.slot(id, from)?.is_empty() || !self.slot(id, to)?.is_empty() {
            return Ok(false);
        }
        let card = self.slot_mut(id, from)?.take();
        self.slot_mut(id, to)?.replace(card);
        self.emit(BoardEvent::SlotChanged { player: id, slot: from });
        self.emit(BoardEvent::SlotChanged { player: id, slot: to });
        Ok(true)
    }

    // === Turn state ===

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current
    }

    /// Make `id` the current player. Ignored for non-members.
    pub fn set_current_player(&mut self, id: PlayerId) {
        if self.current != Some(id) && self.player(id).is_some() {
            self.current = Some(id);
            self.emit(BoardEvent::CurrentPlayerChanged { player: id });
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!(from = %self.phase, to = %phase, "phase change");
            self.phase = phase;
            self.emit(BoardEvent::PhaseChanged { phase });
        }
    }

    /// Register index being activated.
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    pub(crate) fn set_step(&mut self, step: usize) {
        debug_assert!(step < self.register_count, "register {step} out of range");
        if self.step != step {
            self.step = step;
            self.emit(BoardEvent::StepChanged { step });
        }
    }

    #[must_use]
    pub fn is_step_mode(&self) -> bool {
        self.step_mode
    }

    pub(crate) fn set_step_mode(&mut self, step_mode: bool) {
        if self.step_mode != step_mode {
            self.step_mode = step_mode;
            self.emit(BoardEvent::StepModeChanged { step_mode });
        }
    }

    /// Move counter.
    #[must_use]
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Saturates at `u32::MAX`.
    pub(crate) fn increment_counter(&mut self) {
        self.counter = self.counter.saturating_add(1);
        self.emit(BoardEvent::CounterChanged {
            counter: self.counter,
        });
    }

    /// `"Phase = <PHASE>, Player = <name>, Move = <counter>"`.
    ///
    /// The player reads `-` while there is no current player.
    #[must_use]
    pub fn status_summary(&self) -> String {
        let player = self
            .current
            .and_then(|id| self.player(id))
            .map_or("-", Player::name);
        format!(
            "Phase = {}, Player = {}, Move = {}",
            self.phase, player, self.counter
        )
    }

    // === Events ===

    fn emit(&mut self, event: BoardEvent) {
        self.outbox.push(event);
    }

    /// Take queued events in the order they happened.
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.outbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Command;

    fn board(width: u32, height: u32) -> Board {
        Board::new(&GameConfig::new(width, height)).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = board(4, 3);

        assert_eq!(board.name(), "defaultboard");
        assert_eq!(board.cells().count(), 12);
        assert_eq!(board.phase(), Phase::Initialisation);
        assert_eq!(board.current_player(), None);
        assert_eq!(board.cell(3, 2).map(Cell::position), Some(Position::new(3, 2)));
        assert!(board.cell(4, 0).is_none());
        assert!(board.cell(0, 3).is_none());
    }

    #[test]
    fn test_new_board_rejects_empty_extent() {
        assert_eq!(
            Board::new(&GameConfig::new(0, 5)).unwrap_err(),
            ConfigError::EmptyBoard { width: 0, height: 5 }
        );
    }

    #[test]
    fn test_neighbor_wraps() {
        let board = board(8, 8);
        let corner = Position::new(0, 0);

        assert_eq!(board.neighbor(corner, Heading::North), Position::new(0, 7));
        assert_eq!(board.neighbor(corner, Heading::West), Position::new(7, 0));
        assert_eq!(board.neighbor(corner, Heading::East), Position::new(1, 0));
        assert_eq!(board.neighbor(corner, Heading::South), Position::new(0, 1));
        assert_eq!(board.neighbor(Position::new(7, 7), Heading::South), Position::new(7, 0));
        assert_eq!(board.neighbor(Position::new(7, 7), Heading::East), Position::new(0, 7));
    }

    #[test]
    fn test_neighbor_on_single_cell_board_is_itself() {
        let board = board(1, 1);
        for heading in Heading::ALL {
            assert_eq!(board.neighbor(Position::new(0, 0), heading), Position::new(0, 0));
        }
    }

    #[test]
    fn test_can_cross_checks_both_sides() {
        let mut board = board(8, 8);
        board.add_wall(1, 5, Heading::West).unwrap();

        let inside = Position::new(1, 5);
        let west = Position::new(0, 5);
        let east = Position::new(2, 5);

        // Wall on the leaving side
        assert!(!board.can_cross(inside, west, Heading::West));
        // Wall on the entering side
        assert!(!board.can_cross(west, inside, Heading::East));
        // The east edge of (1, 5) is open
        assert!(board.can_cross(east, inside, Heading::West));
        assert!(board.can_cross(inside, east, Heading::East));
    }

    #[test]
    fn test_add_wall_out_of_bounds() {
        let mut board = board(8, 8);
        assert_eq!(
            board.add_wall(8, 0, Heading::North),
            Err(EngineError::OutOfBounds { x: 8, y: 0 })
        );
    }

    #[test]
    fn test_add_wall_emits_once() {
        let mut board = board(8, 8);
        board.add_wall(2, 2, Heading::South).unwrap();
        board.add_wall(2, 2, Heading::South).unwrap();

        assert_eq!(
            board.take_events(),
            vec![BoardEvent::WallAdded {
                position: Position::new(2, 2),
                heading: Heading::South
            }]
        );
    }

    #[test]
    fn test_from_layout_loads_walls_silently() {
        let mut board = Board::from_layout(&BoardLayout::standard(), &GameConfig::default()).unwrap();

        assert!(board.cell(1, 5).unwrap().has_wall(Heading::West));
        assert!(board.cell(5, 2).unwrap().has_wall(Heading::North));
        assert!(board.cell(5, 2).unwrap().has_wall(Heading::South));
        assert!(board.take_events().is_empty());
    }

    #[test]
    fn test_from_layout_rejects_wall_outside() {
        let layout = BoardLayout::empty("small", 2, 2).with_wall(5, 0, Heading::East);
        assert_eq!(
            Board::from_layout(&layout, &GameConfig::default()).unwrap_err(),
            EngineError::OutOfBounds { x: 5, y: 0 }
        );
    }

    #[test]
    fn test_game_id_set_once() {
        let mut board = board(8, 8);
        assert_eq!(board.game_id(), None);

        board.set_game_id(7).unwrap();
        assert_eq!(board.set_game_id(7), Ok(()));
        assert_eq!(
            board.set_game_id(8),
            Err(EngineError::GameIdAlreadySet { current: 7, requested: 8 })
        );
        assert_eq!(board.game_id(), Some(7));
    }

    #[test]
    fn test_add_players_in_turn_order() {
        let mut board = board(8, 8);
        let a = board.add_player("Alice", "red").unwrap();
        let b = board.add_player("Bob", "blue").unwrap();

        assert_eq!(board.player_count(), 2);
        assert_eq!(board.player_number(a), Some(0));
        assert_eq!(board.player_number(b), Some(1));
        assert_eq!(board.player_by_number(1), Some(b));
        assert_eq!(board.player_by_number(2), None);
        assert_eq!(board.player(b).map(Player::name), Some("Bob"));
    }

    #[test]
    fn test_place_player() {
        let mut board = board(8, 8);
        let a = board.add_player("Alice", "red").unwrap();
        let b = board.add_player("Bob", "blue").unwrap();

        board.place_player(a, 3, 3).unwrap();
        assert_eq!(board.player_at(Position::new(3, 3)), Some(a));
        assert_eq!(
            board.place_player(b, 3, 3),
            Err(EngineError::CellOccupied(Position::new(3, 3)))
        );

        board.place_player(a, 4, 4).unwrap();
        assert_eq!(board.player_at(Position::new(3, 3)), None);
        assert_eq!(board.player_at(Position::new(4, 4)), Some(a));
        assert_eq!(board.player(a).unwrap().position(), Some(Position::new(4, 4)));

        assert_eq!(
            board.place_player(PlayerId::new(9), 0, 0),
            Err(EngineError::UnknownPlayer(PlayerId::new(9)))
        );
    }

    #[test]
    fn test_relocate_updates_both_cells() {
        let mut board = board(8, 8);
        let a = board.add_player("Alice", "red").unwrap();
        board.place_player(a, 0, 0).unwrap();
        board.take_events();

        board.relocate(a, Position::new(1, 0));

        assert_eq!(board.player_at(Position::new(0, 0)), None);
        assert_eq!(board.player_at(Position::new(1, 0)), Some(a));
        assert_eq!(
            board.take_events(),
            vec![BoardEvent::PlayerMoved {
                player: a,
                from: Position::new(0, 0),
                to: Position::new(1, 0)
            }]
        );
    }

    #[test]
    fn test_move_card_transfers_ownership() {
        let mut board = board(8, 8);
        let a = board.add_player("Alice", "red").unwrap();
        board
            .set_slot_card(a, SlotRef::Hand(0), Some(CommandCard::new(Command::Forward)))
            .unwrap();

        assert_eq!(board.move_card(a, SlotRef::Hand(0), SlotRef::Program(0)), Ok(true));
        assert!(board.slot(a, SlotRef::Hand(0)).unwrap().is_empty());
        assert_eq!(
            board.slot(a, SlotRef::Program(0)).unwrap().card(),
            Some(&CommandCard::new(Command::Forward))
        );

        // Empty source
        assert_eq!(board.move_card(a, SlotRef::Hand(0), SlotRef::Program(1)), Ok(false));
        // Occupied target
        board
            .set_slot_card(a, SlotRef::Hand(1), Some(CommandCard::new(Command::Left)))
            .unwrap();
        assert_eq!(board.move_card(a, SlotRef::Hand(1), SlotRef::Program(0)), Ok(false));
        // Missing slot
        assert_eq!(
            board.move_card(a, SlotRef::Hand(1), SlotRef::Program(9)),
            Err(EngineError::SlotOutOfRange { player: a, slot: SlotRef::Program(9) })
        );
    }

    #[test]
    fn test_setters_only_emit_on_change() {
        let mut board = board(8, 8);
        let a = board.add_player("Alice", "red").unwrap();
        board.take_events();

        board.set_phase(Phase::Initialisation);
        board.set_step(0);
        board.set_step_mode(false);
        board.set_heading(a, Heading::South).unwrap();
        assert!(board.take_events().is_empty());

        board.set_current_player(a);
        board.set_current_player(a);
        board.set_current_player(PlayerId::new(5));
        assert_eq!(
            board.take_events(),
            vec![BoardEvent::CurrentPlayerChanged { player: a }]
        );
    }

    #[test]
    fn test_status_summary() {
        let mut board = board(8, 8);
        assert_eq!(board.status_summary(), "Phase = INITIALISATION, Player = -, Move = 0");

        let a = board.add_player("Alice", "red").unwrap();
        board.set_current_player(a);
        board.set_phase(Phase::Programming);
        board.increment_counter();
        assert_eq!(board.status_summary(), "Phase = PROGRAMMING, Player = Alice, Move = 1");
    }

    #[test]
    fn test_counter_saturates() {
        let mut board = board(8, 8);
        board.counter = u32::MAX - 1;

        board.increment_counter();
        board.increment_counter();

        assert_eq!(board.counter(), u32::MAX);
    }

    #[test]
    fn test_clone_is_independent_snapshot() {
        let mut board = board(8, 8);
        let a = board.add_player("Alice", "red").unwrap();
        board.place_player(a, 0, 0).unwrap();

        let snapshot = board.clone();
        board.relocate(a, Position::new(0, 1));

        assert_eq!(snapshot.player_at(Position::new(0, 0)), Some(a));
        assert_eq!(board.player_at(Position::new(0, 0)), None);
    }
}
