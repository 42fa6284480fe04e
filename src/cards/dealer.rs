//! Card sources for the programming phase.
//!
//! The controller never reaches for a global RNG: it asks an injected
//! `CardDealer` for every card. `RandomDealer` is the live-play source,
//! `ScriptedDealer` replays a fixed sequence for tests and tutorials.

use serde::{Deserialize, Serialize};

use super::card::CommandCard;
use super::command::Command;
use crate::core::{GameRng, GameRngState};

/// Produces fresh cards when hands are dealt.
pub trait CardDealer {
    /// Deal one new card.
    fn deal(&mut self) -> CommandCard;
}

/// Deals uniformly over every command, interactive ones included.
#[derive(Clone, Debug)]
pub struct RandomDealer {
    rng: GameRng,
}

impl RandomDealer {
    /// Reproducible dealer.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Dealer seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Seeded if `seed` is given, from entropy otherwise.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Checkpoint of the underlying generator.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume dealing from a checkpoint.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }
}

impl Default for RandomDealer {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl CardDealer for RandomDealer {
    fn deal(&mut self) -> CommandCard {
        let index = self.rng.index_below(Command::ALL.len());
        CommandCard::new(Command::ALL[index])
    }
}

/// Cycles through a fixed list of commands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedDealer {
    script: Vec<Command>,
    next: usize,
}

impl ScriptedDealer {
    /// Panics if `script` is empty.
    pub fn new(script: impl Into<Vec<Command>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "Script must contain at least one command");
        Self { script, next: 0 }
    }
}

impl CardDealer for ScriptedDealer {
    fn deal(&mut self) -> CommandCard {
        let command = self.script[self.next];
        self.next = (self.next + 1) % self.script.len();
        CommandCard::new(command)
    }
}

impl<D: CardDealer + ?Sized> CardDealer for Box<D> {
    fn deal(&mut self) -> CommandCard {
        (**self).deal()
    }
}
