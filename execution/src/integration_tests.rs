//! Whole-round tests for the rules engine.
//!
//! These drive a [Game] from the deal to a decided result, saving and
//! restoring it between moves the way the server does.

#[cfg(test)]
mod tests {
    use crate::mocks::dealt_game;
    use crate::Game;
    use blackjack_types::{Card, GameResult, Rank, Suit, DEALER_STANDS_ON, DECK_SIZE};
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn all_cards(game: &Game) -> Vec<Card> {
        let mut cards = game.deck().cards().to_vec();
        cards.extend_from_slice(game.player().cards());
        cards.extend_from_slice(game.dealer().cards());
        cards
    }

    fn assert_cards_accounted(game: &Game) {
        let cards = all_cards(game);
        assert_eq!(cards.len(), DECK_SIZE);
        let unique: HashSet<_> = cards.into_iter().collect();
        assert_eq!(unique.len(), DECK_SIZE, "duplicate card in play");
    }

    fn save_and_load(game: &Game) -> Game {
        let json = game.to_json().expect("serialize");
        Game::from_json(&json).expect("restore")
    }

    /// Hit below 17, then stand, restoring between every move.
    #[test]
    fn test_full_rounds_keep_every_card() {
        for seed in 0..300 {
            let mut game = Game::new();
            game.init(&mut StdRng::seed_from_u64(seed)).unwrap();
            assert_cards_accounted(&game);

            while !game.is_over() && game.player_score() < 17 {
                game = save_and_load(&game);
                game.player_hit().unwrap();
                assert_cards_accounted(&game);
            }

            if !game.is_over() {
                game = save_and_load(&game);
                game.dealer_hit().unwrap();
                assert_cards_accounted(&game);
                assert!(game.dealer_score() >= DEALER_STANDS_ON || game.dealer().is_bust());
            }

            let result = game.result();
            if game.player().is_bust() {
                assert_eq!(result, GameResult::Bust);
            } else if game.dealer().is_bust() {
                assert_eq!(result, GameResult::Win);
            }
        }
    }

    #[test]
    fn test_hit_to_21_forces_dealer_turn() {
        let clubs = |rank| Card::new(Suit::Clubs, rank);
        let diamonds = |rank| Card::new(Suit::Diamonds, rank);
        let mut game = dealt_game(
            [clubs(Rank::Five), clubs(Rank::Six)],
            [diamonds(Rank::Nine), diamonds(Rank::Four)],
            &[clubs(Rank::Ten), diamonds(Rank::Two), diamonds(Rank::Three)],
        );

        game.player_hit().unwrap();
        assert_eq!(game.player().cards().len(), 3);
        assert!(game.is_player_hit_target());
        assert!(!game.player().is_blackjack());
        assert!(!game.is_over());

        game.dealer_hit().unwrap();
        assert_eq!(game.dealer_score(), 18);
        assert_eq!(game.dealer().cards().len(), 4);
        assert!(game.deck().is_empty());
        assert_eq!(game.result(), GameResult::Win);
    }

    #[test]
    fn test_player_18_against_dealer_16_then_20() {
        let clubs = |rank| Card::new(Suit::Clubs, rank);
        let diamonds = |rank| Card::new(Suit::Diamonds, rank);

        // Dealer 16 and forced to draw a four.
        let mut game = dealt_game(
            [clubs(Rank::Ten), clubs(Rank::Eight)],
            [diamonds(Rank::Ten), diamonds(Rank::Six)],
            &[diamonds(Rank::Four)],
        );
        assert_eq!(game.result(), GameResult::Win);
        game.dealer_hit().unwrap();
        assert_eq!(game.dealer_score(), 20);
        assert_eq!(game.result(), GameResult::DealerWin);
    }

    #[test]
    fn test_restore_mid_round_continues_identically() {
        let mut original = Game::new();
        original.init(&mut StdRng::seed_from_u64(11)).unwrap();
        let mut restored = save_and_load(&original);

        original.player_hit().unwrap();
        restored.player_hit().unwrap();
        original.dealer_hit().unwrap();
        restored.dealer_hit().unwrap();

        assert_eq!(original, restored);
        assert_eq!(original.result(), restored.result());
    }
}
