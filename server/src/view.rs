use blackjack_execution::Game;
use blackjack_types::api::{DealerView, GameState, PlayerView};

/// Project a round into the view returned to the player.
///
/// An unresolved view carries no result, only the dealer's first card and no
/// dealer score.
pub fn project(game: &Game, id: &str, resolved: bool) -> GameState {
    let player = game.player();
    let dealer = game.dealer();
    GameState {
        id: id.to_string(),
        result: resolved.then(|| game.result()),
        player: PlayerView {
            cards: player.cards().to_vec(),
            score: player.score(),
        },
        dealer: if resolved {
            DealerView::revealed(dealer.cards(), dealer.score())
        } else {
            DealerView::hidden(dealer.cards())
        },
    }
}
