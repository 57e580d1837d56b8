use blackjack_types::{Card, Error, Rank, Suit, DECK_SIZE};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;

/// An ordered pile of cards. The top of the deck is the end of the vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full deck in construction order: suit by suit, Two through Ace.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// A deck holding exactly `cards`; the last card is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffle in place using Fisher-Yates.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, Error> {
        self.cards.pop().ok_or(Error::DeckExhausted)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Rebuild a deck from its JSON snapshot (an array of cards).
    pub fn restore(value: Value) -> Result<Self, Error> {
        if !value.is_array() {
            return Err(Error::invalid_format("deck", "expected an array of cards"));
        }
        let cards = serde_json::from_value(value).map_err(|e| Error::invalid_format("deck", e))?;
        Ok(Self { cards })
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
