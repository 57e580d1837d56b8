use crate::{Error, Store};
use blackjack_execution::Game;
use std::sync::Arc;
use tracing::{debug, warn};

/// Saves and loads rounds by session id.
#[derive(Clone)]
pub struct Sessions {
    store: Arc<dyn Store>,
}

impl Sessions {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub fn persist(&self, id: &str, game: &Game) -> Result<(), Error> {
        let snapshot = game.to_json()?;
        self.store.set(id, snapshot)?;
        debug!(id, "persisted session");
        Ok(())
    }

    /// Load the round stored under `id`.
    ///
    /// A missing entry, a read failure and a malformed snapshot all surface as
    /// [Error::SessionNotFound].
    pub fn restore(&self, id: &str) -> Result<Game, Error> {
        let snapshot = match self.store.get(id) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                warn!(id, "session not found");
                return Err(Error::SessionNotFound);
            }
            Err(e) => {
                warn!(id, error = %e, "failed to read session");
                return Err(Error::SessionNotFound);
            }
        };
        Game::from_json(&snapshot).map_err(|e| {
            warn!(id, error = %e, "failed to restore session");
            Error::SessionNotFound
        })
    }

    pub fn clean(&self, id: &str) -> Result<(), Error> {
        self.store.delete(id)?;
        debug!(id, "cleaned session");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, StoreError};
    use blackjack_execution::mocks::dealt_game;
    use blackjack_types::{Card, Rank, Suit};
    use std::time::Duration;

    struct BrokenStore;

    impl Store for BrokenStore {
        fn get(&self, _: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Poisoned)
        }
        fn set(&self, _: &str, _: String) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
        fn delete(&self, _: &str) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
    }

    fn game() -> Game {
        dealt_game(
            [Card::new(Suit::Clubs, Rank::Ten), Card::new(Suit::Clubs, Rank::Six)],
            [Card::new(Suit::Hearts, Rank::Nine), Card::new(Suit::Hearts, Rank::Seven)],
            &[Card::new(Suit::Spades, Rank::Two)],
        )
    }

    #[test]
    fn test_persist_restore_clean() {
        let store = Arc::new(MemoryStore::new(Duration::from_secs(60)));
        let sessions = Sessions::new(store.clone());
        let game = game();

        sessions.persist("abc", &game).unwrap();
        assert_eq!(sessions.restore("abc").unwrap(), game);

        sessions.clean("abc").unwrap();
        assert!(matches!(
            sessions.restore("abc"),
            Err(Error::SessionNotFound)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_snapshot_is_not_found() {
        let store = Arc::new(MemoryStore::new(Duration::from_secs(60)));
        store.set("abc", "{\"deck\": []}".to_string()).unwrap();
        store.set("xyz", "not json".to_string()).unwrap();
        let sessions = Sessions::new(store);
        assert!(matches!(
            sessions.restore("abc"),
            Err(Error::SessionNotFound)
        ));
        assert!(matches!(
            sessions.restore("xyz"),
            Err(Error::SessionNotFound)
        ));
    }

    #[test]
    fn test_expired_session_is_not_found() {
        let sessions = Sessions::new(Arc::new(MemoryStore::new(Duration::ZERO)));
        sessions.persist("abc", &game()).unwrap();
        assert!(matches!(
            sessions.restore("abc"),
            Err(Error::SessionNotFound)
        ));
    }

    #[test]
    fn test_store_failures() {
        let sessions = Sessions::new(Arc::new(BrokenStore));
        assert!(matches!(
            sessions.restore("abc"),
            Err(Error::SessionNotFound)
        ));
        assert!(matches!(
            sessions.persist("abc", &game()),
            Err(Error::Store(StoreError::Poisoned))
        ));
        assert!(matches!(sessions.clean("abc"), Err(Error::Store(_))));
    }
}
