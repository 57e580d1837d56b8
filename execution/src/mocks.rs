//! Helpers for building rigged decks and games in tests.

use crate::{Deck, Game, Participant};
use blackjack_types::{Card, PLAYER_NAME};

/// A deck that yields `draws` in the given order.
pub fn stacked_deck(draws: &[Card]) -> Deck {
    Deck::from_cards(draws.iter().rev().copied().collect())
}

/// A game whose deck is stacked so that `deal` hands out `player` and
/// `dealer`, followed by `rest` for any later draws.
pub fn rigged_game(player: [Card; 2], dealer: [Card; 2], rest: &[Card]) -> Game {
    let mut draws = vec![player[0], dealer[0], player[1], dealer[1]];
    draws.extend_from_slice(rest);
    Game::from_parts(
        stacked_deck(&draws),
        Participant::player(PLAYER_NAME),
        Participant::dealer(),
    )
}

/// Like [rigged_game], but already dealt.
pub fn dealt_game(player: [Card; 2], dealer: [Card; 2], rest: &[Card]) -> Game {
    let mut game = rigged_game(player, dealer, rest);
    game.deal().expect("stacked deck holds the initial deal");
    game
}
