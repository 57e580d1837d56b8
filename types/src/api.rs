//! JSON views exchanged over the HTTP API.

use crate::{Card, GameResult};
use serde::{Deserialize, Serialize};

/// A round as shown to the player.
///
/// `result` stays `None` until the round is decided. Until then the dealer
/// view only exposes the up card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub id: String,
    pub result: Option<GameResult>,
    pub player: PlayerView,
    pub dealer: DealerView,
}

impl GameState {
    pub fn is_resolved(&self) -> bool {
        self.result.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub cards: Vec<Card>,
    pub score: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerView {
    pub cards: Vec<Option<Card>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u16>,
}

impl DealerView {
    /// Keep the first card face up, mask the rest and withhold the score.
    pub fn hidden(cards: &[Card]) -> Self {
        Self {
            cards: cards
                .iter()
                .enumerate()
                .map(|(index, card)| (index == 0).then_some(*card))
                .collect(),
            score: None,
        }
    }

    pub fn revealed(cards: &[Card], score: u16) -> Self {
        Self {
            cards: cards.iter().copied().map(Some).collect(),
            score: Some(score),
        }
    }
}

/// Body of every non-success response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
}
