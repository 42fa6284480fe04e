//! Card system: commands, cards, slots and dealers.
//!
//! ## Key Types
//!
//! - `Command`: what a card does, including interactive choices
//! - `CommandCard`: an immutable dealt card
//! - `CardSlot` / `SlotRef`: register and hand positions on a player's mat
//! - `CardDealer`: injectable card source (`RandomDealer`, `ScriptedDealer`)

pub mod command;
pub mod card;
pub mod dealer;

pub use command::Command;
pub use card::{CardSlot, CommandCard, SlotRef};
pub use dealer::{CardDealer, RandomDealer, ScriptedDealer};
