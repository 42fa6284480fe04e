//! # roborally-engine
//!
//! A turn-based robot programming board game engine.
//!
//! Players program a row of registers from a randomly dealt hand of
//! command cards. During activation the engine executes register 0 for
//! every player in turn order, then register 1, and so on, moving robots
//! across a wrap-around grid, stopping them at walls and pushing any
//! robots in the way.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: card dealing goes through an injected `CardDealer`;
//!    seed it and a whole game replays exactly.
//!
//! 2. **Atomic moves**: a push chain is planned before it is committed, so
//!    either every robot in the chain moves or none does.
//!
//! 3. **Observable**: every committed change produces a `BoardEvent`;
//!    blocked moves produce nothing.
//!
//! ## Modules
//!
//! - `core`: headings, players, configuration, errors, RNG
//! - `cards`: commands, cards, slots and dealers
//! - `board`: the wrap-around grid, walls and turn bookkeeping
//! - `events`: change notification
//! - `rules`: movement, push chains and command dispatch
//! - `engine`: the programming/activation state machine
//!
//! ## Example
//!
//! ```
//! use roborally::{
//!     Board, BoardLayout, Command, EventLog, GameConfig, GameController,
//!     Phase, ScriptedDealer, SlotRef,
//! };
//!
//! let board = Board::from_layout(&BoardLayout::standard(), &GameConfig::default()).unwrap();
//! let mut game = GameController::new(board, ScriptedDealer::new([Command::Forward]), EventLog::new());
//!
//! let alice = game.board_mut().add_player("Alice", "red").unwrap();
//! game.board_mut().place_player(alice, 3, 3).unwrap();
//!
//! game.start_programming_phase();
//! game.move_card(alice, SlotRef::Hand(0), SlotRef::Program(0)).unwrap();
//! game.finish_programming_phase().unwrap();
//! game.run_to_completion().unwrap();
//!
//! assert_eq!(game.board().phase(), Phase::Programming);
//! assert_eq!(game.status_summary(), "Phase = PROGRAMMING, Player = Alice, Move = 0");
//! ```

pub mod core;
pub mod cards;
pub mod board;
pub mod events;
pub mod rules;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, EngineError, GameConfig, GameRng, GameRngState, Heading, MoveError, Phase,
    Player, PlayerId, Position, HAND_SIZE, REGISTER_COUNT,
};

pub use crate::cards::{
    CardDealer, CardSlot, Command, CommandCard, RandomDealer, ScriptedDealer, SlotRef,
};

pub use crate::board::{Board, BoardLayout, Cell, WallSpec};

pub use crate::events::{BoardEvent, EventLog, EventSink, NullSink};

pub use crate::rules::{CommandExecutor, MovementResolver};

pub use crate::engine::{GameController, StepOutcome};
