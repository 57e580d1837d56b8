use crate::{hand::Hand, Deck};
use blackjack_types::{Card, Error, DEALER_NAME, DEALER_STANDS_ON};
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};
use serde_json::Value;

/// How a participant draws once it is their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Draws only when told to.
    Manual,
    /// Draws on its own until the hand reaches the given value.
    StandOn(u16),
}

impl Policy {
    pub fn wants_card(&self, score: u16) -> bool {
        match self {
            Policy::Manual => false,
            Policy::StandOn(threshold) => score < *threshold,
        }
    }
}

/// A named holder of a hand.
///
/// The player and the dealer share this shape and differ only in [Policy].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    name: String,
    hand: Hand,
    policy: Policy,
}

#[derive(Deserialize)]
struct PlayerSnapshot {
    name: String,
    cards: Vec<Card>,
}

#[derive(Deserialize)]
struct DealerSnapshot {
    cards: Vec<Card>,
}

impl Participant {
    pub fn player(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::default(),
            policy: Policy::Manual,
        }
    }

    pub fn dealer() -> Self {
        Self {
            name: DEALER_NAME.to_string(),
            hand: Hand::default(),
            policy: Policy::StandOn(DEALER_STANDS_ON),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    pub fn hit(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    pub fn score(&self) -> u16 {
        self.hand.value()
    }

    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    pub fn is_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    pub fn is_hit_target(&self) -> bool {
        self.hand.is_hit_target()
    }

    /// Draw from `deck` for as long as the policy asks for cards.
    pub fn play(&mut self, deck: &mut Deck) -> Result<(), Error> {
        while self.policy.wants_card(self.score()) {
            self.hit(deck.draw()?);
        }
        Ok(())
    }

    /// Rebuild a player from `{name, cards}`.
    pub fn restore_player(value: Value) -> Result<Self, Error> {
        let snapshot: PlayerSnapshot =
            serde_json::from_value(value).map_err(|e| Error::invalid_format("player", e))?;
        let mut player = Self::player(snapshot.name);
        player.hand = Hand::new(snapshot.cards);
        Ok(player)
    }

    /// Rebuild the dealer from `{cards}`. Any stored name is ignored.
    pub fn restore_dealer(value: Value) -> Result<Self, Error> {
        let snapshot: DealerSnapshot =
            serde_json::from_value(value).map_err(|e| Error::invalid_format("dealer", e))?;
        let mut dealer = Self::dealer();
        dealer.hand = Hand::new(snapshot.cards);
        Ok(dealer)
    }
}

impl Serialize for Participant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Participant", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("cards", self.hand.cards())?;
        state.end()
    }
}
