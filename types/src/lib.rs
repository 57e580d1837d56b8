//! Data model shared by the blackjack engine, server and client.

pub mod api;
mod card;
mod constants;
mod error;
mod game;

pub use card::{Card, Rank, Suit};
pub use constants::*;
pub use error::Error;
pub use game::GameResult;
