//! Blackjack rules engine.
//!
//! A [Game] owns a [Deck] and two [Participant]s and moves them through the
//! deal, the player's turn and the dealer's turn. There is no stored phase:
//! whether the round is over is always derived from the hands, so a [Game]
//! restored from its JSON snapshot behaves exactly like the one that was saved.

mod deck;
mod game;
mod hand;
mod participant;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

#[cfg(test)]
mod integration_tests;

pub use deck::Deck;
pub use game::Game;
pub use participant::{Participant, Policy};
