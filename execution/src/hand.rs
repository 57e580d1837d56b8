use blackjack_types::{Card, ACE_REDUCTION, BLACKJACK, INITIAL_HAND_SIZE};

/// Cards held by one participant. Append-only during a round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Best total for the hand: aces count 11 until that would bust, then 1.
    pub fn value(&self) -> u16 {
        let mut value: u16 = 0;
        let mut aces = 0;
        for card in &self.cards {
            value += card.value();
            if card.is_ace() {
                aces += 1;
            }
        }

        while value > BLACKJACK && aces > 0 {
            value -= ACE_REDUCTION;
            aces -= 1;
        }
        value
    }

    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    pub fn is_hit_target(&self) -> bool {
        self.value() == BLACKJACK
    }

    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == INITIAL_HAND_SIZE && self.is_hit_target()
    }
}
