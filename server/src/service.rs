use crate::{project, Error, Sessions};
use blackjack_execution::Game;
use blackjack_types::{api::GameState, GameResult};
use tracing::info;
use uuid::Uuid;

/// The three player actions.
#[derive(Clone)]
pub struct Service {
    sessions: Sessions,
}

impl Service {
    pub fn new(sessions: Sessions) -> Self {
        Self { sessions }
    }

    /// Deal a fresh round under a new session id.
    pub fn start(&self) -> Result<GameState, Error> {
        let mut game = Game::new();
        game.init(&mut rand::thread_rng())?;
        self.begin(Uuid::new_v4().to_string(), game)
    }

    /// Open a session for an already dealt round.
    ///
    /// A round decided by the deal is returned resolved and never stored.
    pub fn begin(&self, id: String, game: Game) -> Result<GameState, Error> {
        if game.is_over() {
            info!(id = %id, result = %game.result(), "round decided on the deal");
            return Ok(project(&game, &id, true));
        }
        self.sessions.persist(&id, &game)?;
        info!(id = %id, "session started");
        Ok(project(&game, &id, false))
    }

    pub fn hit(&self, id: &str) -> Result<GameState, Error> {
        let mut game = self.sessions.restore(id)?;
        game.player_hit()?;

        if game.result() == GameResult::Bust {
            return self.finish(id, &game);
        }
        if game.is_player_hit_target() {
            game.dealer_hit()?;
            return self.finish(id, &game);
        }

        self.sessions.persist(id, &game)?;
        Ok(project(&game, id, false))
    }

    pub fn stand(&self, id: &str) -> Result<GameState, Error> {
        let mut game = self.sessions.restore(id)?;
        game.dealer_hit()?;
        self.finish(id, &game)
    }

    fn finish(&self, id: &str, game: &Game) -> Result<GameState, Error> {
        self.sessions.clean(id)?;
        let view = project(game, id, true);
        info!(id, result = %game.result(), "session finished");
        Ok(view)
    }
}
