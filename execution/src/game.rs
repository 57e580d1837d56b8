use crate::{Deck, Participant};
use blackjack_types::{Error, GameResult, PLAYER_NAME};
use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// One round of blackjack between a player and the house.
///
/// Serializes to `{player, dealer, deck}`; [Game::restore] is the inverse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Game {
    player: Participant,
    dealer: Participant,
    deck: Deck,
}

impl Game {
    /// A fresh, unshuffled round with nothing dealt.
    pub fn new() -> Self {
        Self::from_parts(Deck::new(), Participant::player(PLAYER_NAME), Participant::dealer())
    }

    pub fn from_parts(deck: Deck, player: Participant, dealer: Participant) -> Self {
        Self {
            player,
            dealer,
            deck,
        }
    }

    /// Shuffle the deck and deal the opening hands.
    pub fn init<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), Error> {
        self.deck.shuffle(rng);
        self.deal()
    }

    /// Deal two cards each, alternating player and dealer.
    pub fn deal(&mut self) -> Result<(), Error> {
        self.player.hit(self.deck.draw()?);
        self.dealer.hit(self.deck.draw()?);
        self.player.hit(self.deck.draw()?);
        self.dealer.hit(self.deck.draw()?);
        Ok(())
    }

    /// Give the player one more card, unless the round is already over.
    pub fn player_hit(&mut self) -> Result<(), Error> {
        if self.is_over() {
            return Ok(());
        }
        self.player.hit(self.deck.draw()?);
        Ok(())
    }

    /// Play out the dealer's whole turn, unless the round is already over.
    pub fn dealer_hit(&mut self) -> Result<(), Error> {
        if self.is_over() {
            return Ok(());
        }
        self.dealer.play(&mut self.deck)?;
        debug!(
            score = self.dealer.score(),
            cards = self.dealer.cards().len(),
            "dealer finished"
        );
        Ok(())
    }

    /// True once either side is bust or holds a blackjack.
    pub fn is_over(&self) -> bool {
        [&self.player, &self.dealer]
            .iter()
            .any(|p| p.is_bust() || p.is_blackjack())
    }

    pub fn is_player_hit_target(&self) -> bool {
        self.player.is_hit_target()
    }

    pub fn player_score(&self) -> u16 {
        self.player.score()
    }

    pub fn dealer_score(&self) -> u16 {
        self.dealer.score()
    }

    pub fn player(&self) -> &Participant {
        &self.player
    }

    pub fn dealer(&self) -> &Participant {
        &self.dealer
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Outcome of the round as the hands stand now.
    ///
    /// Always yields a value; callers decide whether the round is finished.
    pub fn result(&self) -> GameResult {
        let (player, dealer) = (&self.player, &self.dealer);
        if player.is_bust() {
            return GameResult::Bust;
        }
        if dealer.is_bust() {
            return GameResult::Win;
        }
        match (player.is_blackjack(), dealer.is_blackjack()) {
            (true, true) => return GameResult::Push,
            (true, false) => return GameResult::Blackjack,
            (false, true) => return GameResult::DealerBlackjack,
            (false, false) => {}
        }
        match player.score().cmp(&dealer.score()) {
            std::cmp::Ordering::Greater => GameResult::Win,
            std::cmp::Ordering::Less => GameResult::DealerWin,
            std::cmp::Ordering::Equal => GameResult::Push,
        }
    }

    /// Rebuild a game from its JSON snapshot.
    ///
    /// Each of `deck`, `player` and `dealer` is validated on its own; the
    /// first one that fails aborts the restore.
    pub fn restore(value: Value) -> Result<Self, Error> {
        let Value::Object(mut fields) = value else {
            return Err(Error::invalid_format("game", "expected an object"));
        };
        let deck = Deck::restore(fields.remove("deck").unwrap_or(Value::Null))?;
        let player = Participant::restore_player(fields.remove("player").unwrap_or(Value::Null))?;
        let dealer = Participant::restore_dealer(fields.remove("dealer").unwrap_or(Value::Null))?;
        Ok(Self::from_parts(deck, player, dealer))
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|e| Error::invalid_format("game", e))
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        let value = serde_json::from_str(json).map_err(|e| Error::invalid_format("game", e))?;
        Self::restore(value)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
