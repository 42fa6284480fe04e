//! Turn and phase state machine.
//!
//! ## Round structure
//!
//! ```text
//! INITIALISATION ─▶ PROGRAMMING ─▶ ACTIVATION ⇄ PLAYER_INTERACTION
//!                        ▲              │
//!                        └──────────────┘ all registers done
//! ```
//!
//! During activation one resolution step runs the current player's card in
//! the current register, then hands the turn to the next player in board
//! order. After the last player the next register is revealed and player 0
//! goes again; after the last register a new programming phase starts.
//!
//! ## Step mode
//!
//! `run_single_step` executes exactly one resolution step.
//! `run_to_completion` keeps stepping until the phase leaves activation,
//! either because the round ended or because a card needs a decision.
//!
//! ## Move counter
//!
//! Only free moves (`move_current_player_to`) count. Register cards leave
//! the counter alone, whether they move a robot or not.
//!
//! ## Notification
//!
//! Board events are delivered to the sink at the end of every public
//! operation, in the order the mutations happened, including when the
//! operation fails part-way.

use tracing::{debug, error, instrument};

use crate::board::Board;
use crate::cards::{CardDealer, Command, CommandCard, RandomDealer, SlotRef};
use crate::core::{EngineError, GameConfig, Phase, PlayerId};
use crate::events::{EventLog, EventSink};
use crate::rules::CommandExecutor;

/// What one resolution step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The register's command ran (possibly as a blocked no-op).
    Executed(Command),
    /// The register was empty; the turn still advanced.
    Empty,
    /// The register holds an interactive card. The game is parked in
    /// `PlayerInteraction` until `resolve_interactive` is called.
    AwaitingInteraction(Command),
}

/// Drives a board through programming and activation.
pub struct GameController<D = RandomDealer, S = EventLog> {
    board: Board,
    dealer: D,
    sink: S,
}

impl GameController<RandomDealer, EventLog> {
    /// Build a wall-free board from `config`, dealing from its seed (or
    /// from entropy) and recording events in an `EventLog`.
    pub fn from_config(config: &GameConfig) -> Result<Self, EngineError> {
        let board = Board::new(config)?;
        Ok(Self::new(
            board,
            RandomDealer::from_seed(config.seed),
            EventLog::new(),
        ))
    }
}

impl<D: CardDealer, S: EventSink> GameController<D, S> {
    pub fn new(board: Board, dealer: D, sink: S) -> Self {
        Self { board, dealer, sink }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setup (players, walls, placement).
    ///
    /// Changes made through it reach the sink on the next controller
    /// operation or `flush_events`.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (Board, D, S) {
        (self.board, self.dealer, self.sink)
    }

    /// Deliver queued board events to the sink.
    pub fn flush_events(&mut self) {
        for event in self.board.take_events() {
            self.sink.notify(&event);
        }
    }

    fn flushed<T>(&mut self, result: T) -> T {
        self.flush_events();
        result
    }

    #[must_use]
    pub fn status_summary(&self) -> String {
        self.board.status_summary()
    }

    // === Programming ===

    /// Start a round: clear every program, deal fresh hands and show
    /// everything. Discards any program in progress.
    #[instrument(skip(self))]
    pub fn start_programming_phase(&mut self) {
        self.begin_round();
        self.flush_events();
    }

    fn begin_round(&mut self) {
        self.board.set_phase(Phase::Programming);
        if let Some(first) = self.board.player_by_number(0) {
            self.board.set_current_player(first);
        }
        self.board.set_step(0);

        let players: Vec<PlayerId> = self.board.players().iter().map(|p| p.id()).collect();
        for player in players {
            for register in 0..self.board.register_count() {
                self.fill_slot(player, SlotRef::Program(register), None, true);
            }
            for index in 0..self.board.hand_size() {
                let card = self.dealer.deal();
                self.fill_slot(player, SlotRef::Hand(index), Some(card), true);
            }
        }
        debug!(players = self.board.player_count(), "hands dealt");
    }

    /// Slots exist for every registered player, so this cannot fail for
    /// ids taken from the board.
    fn fill_slot(
        &mut self,
        player: PlayerId,
        slot: SlotRef,
        card: Option<CommandCard>,
        visible: bool,
    ) {
        let filled = self
            .board
            .set_slot_card(player, slot, card)
            .and_then(|_| self.board.set_slot_visible(player, slot, visible));
        debug_assert!(filled.is_ok(), "{player} has no slot {slot:?}");
    }

    fn reveal_slot(&mut self, player: PlayerId, slot: SlotRef, visible: bool) {
        let revealed = self.board.set_slot_visible(player, slot, visible);
        debug_assert!(revealed.is_ok(), "{player} has no slot {slot:?}");
    }

    /// Move a card between a player's hand and program slots.
    #[instrument(skip(self))]
    pub fn move_card(
        &mut self,
        player: PlayerId,
        from: SlotRef,
        to: SlotRef,
    ) -> Result<bool, EngineError> {
        let result = self.board.move_card(player, from, to);
        self.flushed(result)
    }

    /// End programming: hide every register except the first and start
    /// activation with player 0 at register 0.
    #[instrument(skip(self))]
    pub fn finish_programming_phase(&mut self) -> Result<(), EngineError> {
        let phase = self.board.phase();
        if phase != Phase::Programming {
            return Err(EngineError::WrongPhase {
                expected: Phase::Programming,
                actual: phase,
            });
        }

        self.hide_program_fields();
        self.show_program_fields(0);
        self.board.set_phase(Phase::Activation);
        if let Some(first) = self.board.player_by_number(0) {
            self.board.set_current_player(first);
        }
        self.board.set_step(0);

        self.flush_events();
        Ok(())
    }

    fn show_program_fields(&mut self, register: usize) {
        if register >= self.board.register_count() {
            return;
        }
        for n in 0..self.board.player_count() {
            if let Some(player) = self.board.player_by_number(n) {
                self.reveal_slot(player, SlotRef::Program(register), true);
            }
        }
    }

    fn hide_program_fields(&mut self) {
        for n in 0..self.board.player_count() {
            let Some(player) = self.board.player_by_number(n) else {
                continue;
            };
            for register in 0..self.board.register_count() {
                self.reveal_slot(player, SlotRef::Program(register), false);
            }
        }
    }

    // === Activation ===

    /// Execute registers until the phase leaves activation.
    #[instrument(skip(self))]
    pub fn run_to_completion(&mut self) -> Result<(), EngineError> {
        self.ready_to_step()?;
        self.board.set_step_mode(false);
        let result = self.continue_programs().map(|_| ());
        self.flushed(result)
    }

    /// Execute exactly one resolution step.
    #[instrument(skip(self))]
    pub fn run_single_step(&mut self) -> Result<StepOutcome, EngineError> {
        self.ready_to_step()?;
        self.board.set_step_mode(true);
        let result = self.continue_programs();
        self.flushed(result)
    }

    /// Supply the choice for a parked interactive card and carry on.
    ///
    /// Executes `option` for the current player, advances the turn, then
    /// keeps going unless step mode is on.
    #[instrument(skip(self))]
    pub fn resolve_interactive(&mut self, option: Command) -> Result<(), EngineError> {
        let result = self.resolve_and_continue(option);
        self.flushed(result)
    }

    fn resolve_and_continue(&mut self, option: Command) -> Result<(), EngineError> {
        let phase = self.board.phase();
        if phase != Phase::PlayerInteraction {
            return Err(EngineError::WrongPhase {
                expected: Phase::PlayerInteraction,
                actual: phase,
            });
        }
        let (player, command) = self.current_card()?;
        let command = command
            .filter(|c| c.is_interactive())
            .ok_or(EngineError::NotInteractive)?;
        if !command.options().contains(&option) {
            return Err(EngineError::InvalidOption { command, option });
        }

        self.board.set_phase(Phase::Activation);
        debug!(%player, %command, %option, "interactive card resolved");
        CommandExecutor::execute(&mut self.board, player, option);
        self.advance(player);

        while self.board.phase() == Phase::Activation && !self.board.is_step_mode() {
            self.execute_next_step()?;
        }
        Ok(())
    }

    fn continue_programs(&mut self) -> Result<StepOutcome, EngineError> {
        loop {
            let outcome = self.execute_next_step()?;
            if self.board.phase() != Phase::Activation || self.board.is_step_mode() {
                return Ok(outcome);
            }
        }
    }

    /// The current player and the command in their current register.
    fn current_card(&self) -> Result<(PlayerId, Option<Command>), EngineError> {
        let player = self.board.current_player().ok_or_else(|| {
            error!("resolution requested without a current player");
            EngineError::NoCurrentPlayer
        })?;
        let step = self.board.step();
        let count = self.board.register_count();
        if step >= count {
            error!(step, count, "register index out of range");
            return Err(EngineError::RegisterOutOfRange {
                register: step,
                count,
            });
        }
        let command = self
            .board
            .slot(player, SlotRef::Program(step))?
            .card()
            .map(CommandCard::command);
        Ok((player, command))
    }

    /// Checks a resolution step could run, without touching the board.
    fn ready_to_step(&self) -> Result<(PlayerId, Option<Command>), EngineError> {
        let phase = self.board.phase();
        if phase != Phase::Activation {
            error!(%phase, "resolution step outside activation");
            return Err(EngineError::WrongPhase {
                expected: Phase::Activation,
                actual: phase,
            });
        }
        self.current_card()
    }

    fn execute_next_step(&mut self) -> Result<StepOutcome, EngineError> {
        let (player, command) = self.ready_to_step()?;

        let outcome = match command {
            Some(command) if command.is_interactive() => {
                debug!(%player, %command, step = self.board.step(), "waiting for player choice");
                self.board.set_phase(Phase::PlayerInteraction);
                return Ok(StepOutcome::AwaitingInteraction(command));
            }
            Some(command) => {
                CommandExecutor::execute(&mut self.board, player, command);
                StepOutcome::Executed(command)
            }
            None => StepOutcome::Empty,
        };

        self.advance(player);
        Ok(outcome)
    }

    /// Hand the turn to the next player, the next register, or a new round.
    fn advance(&mut self, player: PlayerId) {
        let next = self
            .board
            .player_number(player)
            .and_then(|n| self.board.player_by_number(n + 1));

        if let Some(next) = next {
            self.board.set_current_player(next);
            return;
        }

        let step = self.board.step() + 1;
        if step < self.board.register_count() {
            self.show_program_fields(step);
            self.board.set_step(step);
            if let Some(first) = self.board.player_by_number(0) {
                self.board.set_current_player(first);
            }
        } else {
            debug!("all registers executed, starting new round");
            self.begin_round();
        }
    }

    // === Free moves ===

    /// Put the current player on the empty cell (`x`, `y`), count the move
    /// and pass the turn on.
    ///
    /// Returns false without changing anything if the cell is occupied.
    #[instrument(skip(self))]
    pub fn move_current_player_to(&mut self, x: u32, y: u32) -> Result<bool, EngineError> {
        let result = self.free_move(x, y);
        self.flushed(result)
    }

    fn free_move(&mut self, x: u32, y: u32) -> Result<bool, EngineError> {
        let player = self
            .board
            .current_player()
            .ok_or(EngineError::NoCurrentPlayer)?;
        let cell = self.board.cell(x, y).ok_or(EngineError::OutOfBounds { x, y })?;
        if cell.occupant().is_some() {
            return Ok(false);
        }

        self.board.place_player(player, x, y)?;
        self.board.increment_counter();

        let count = self.board.player_count();
        let next = self
            .board
            .player_number(player)
            .and_then(|n| self.board.player_by_number((n + 1) % count));
        if let Some(next) = next {
            self.board.set_current_player(next);
        }
        Ok(true)
    }
}
