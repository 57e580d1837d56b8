use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a round, from the player's point of view.
///
/// The serialized names are the strings the browser client displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    #[serde(rename = "Dealer Win")]
    DealerWin,
    Bust,
    Push,
    Blackjack,
    #[serde(rename = "Dealer Blackjack")]
    DealerBlackjack,
}

impl GameResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::Win => "Win",
            GameResult::DealerWin => "Dealer Win",
            GameResult::Bust => "Bust",
            GameResult::Push => "Push",
            GameResult::Blackjack => "Blackjack",
            GameResult::DealerBlackjack => "Dealer Blackjack",
        }
    }

    /// True when either side was dealt a natural and the other was not.
    pub fn is_natural(&self) -> bool {
        matches!(self, GameResult::Blackjack | GameResult::DealerBlackjack)
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
