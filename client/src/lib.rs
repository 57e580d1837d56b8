pub mod client;

pub use client::Client;
pub use client::RetryPolicy;
use thiserror::Error;

/// Error type for client operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("failed ({status}): {message}")]
    Failed {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid URL scheme: {0} (expected http or https)")]
    InvalidScheme(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_execution::mocks::dealt_game;
    use blackjack_server::{Api, MemoryStore, Service, Sessions, Store};
    use blackjack_types::{Card, GameResult, Rank, Suit, SESSION_NOT_FOUND_MESSAGE};
    use std::{net::SocketAddr, sync::Arc};
    use tokio::time::{sleep, Duration};

    struct TestContext {
        service: Arc<Service>,
        store: Arc<MemoryStore>,
        base_url: String,
        server_handle: tokio::task::JoinHandle<()>,
    }

    impl TestContext {
        async fn new() -> Self {
            let store = Arc::new(MemoryStore::new(Duration::from_secs(60)));
            let service = Arc::new(Service::new(Sessions::new(store.clone())));
            let api = Api::new(service.clone(), None);

            // Start server on random port
            let addr = SocketAddr::from(([127, 0, 0, 1], 0));
            let router = api.router();
            let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
            let actual_addr = listener.local_addr().unwrap();
            let base_url = format!("http://{actual_addr}");

            let server_handle = tokio::spawn(async move {
                axum::serve(
                    listener,
                    router.into_make_service_with_connect_info::<SocketAddr>(),
                )
                .await
                .unwrap();
            });

            // Give server time to start
            sleep(Duration::from_millis(100)).await;

            Self {
                service,
                store,
                base_url,
                server_handle,
            }
        }

        fn create_client(&self) -> Client {
            Client::new(&self.base_url).unwrap()
        }

        /// Store a round whose remaining deck is known.
        fn seed_round(&self, id: &str) {
            let clubs = |rank| Card::new(Suit::Clubs, rank);
            let hearts = |rank| Card::new(Suit::Hearts, rank);
            let game = dealt_game(
                [clubs(Rank::Seven), clubs(Rank::Four)],
                [hearts(Rank::King), hearts(Rank::Six)],
                &[clubs(Rank::Five), hearts(Rank::Nine)],
            );
            self.service.begin(id.to_string(), game).unwrap();
        }
    }

    impl Drop for TestContext {
        fn drop(&mut self) {
            self.server_handle.abort();
        }
    }

    #[tokio::test]
    async fn test_client_start() {
        let ctx = TestContext::new().await;
        let client = ctx.create_client();

        let state = client.start().await.unwrap();
        assert_eq!(state.player.cards.len(), 2);
        assert_eq!(state.dealer.cards.len(), 2);
        assert_eq!(
            ctx.store.get(&state.id).unwrap().is_some(),
            !state.is_resolved()
        );
    }

    #[tokio::test]
    async fn test_client_hit_and_stand() {
        let ctx = TestContext::new().await;
        let client = ctx.create_client();
        ctx.seed_round("round-1");

        let state = client.hit("round-1").await.unwrap();
        assert_eq!(state.result, None);
        assert_eq!(state.player.score, 16);
        assert_eq!(state.dealer.cards, vec![Some(Card::new(Suit::Hearts, Rank::King)), None]);

        let state = client.stand("round-1").await.unwrap();
        assert_eq!(state.result, Some(GameResult::Win));
        assert_eq!(state.dealer.score, Some(25));
        assert!(ctx.store.is_empty());
    }

    #[tokio::test]
    async fn test_client_unknown_session() {
        let ctx = TestContext::new().await;
        let client = ctx.create_client();

        match client.stand("missing").await {
            Err(Error::Failed { status, message }) => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert_eq!(message, SESSION_NOT_FOUND_MESSAGE);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_game_url() {
        let client = Client::new("http://localhost:3000").unwrap();
        assert_eq!(
            client.game_url(&[]).unwrap().as_str(),
            "http://localhost:3000/api/v1/game"
        );
        assert_eq!(
            client.game_url(&["abc", "hit"]).unwrap().as_str(),
            "http://localhost:3000/api/v1/game/abc/hit"
        );
        // Ids cannot add path segments.
        assert_eq!(
            client.game_url(&["a/b", "stand"]).unwrap().as_str(),
            "http://localhost:3000/api/v1/game/a%2Fb/stand"
        );

        let client = Client::new("https://example.com/casino/").unwrap();
        assert_eq!(
            client.game_url(&[]).unwrap().as_str(),
            "https://example.com/casino/api/v1/game"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            Client::new("ftp://localhost"),
            Err(Error::InvalidScheme(scheme)) if scheme == "ftp"
        ));
        assert!(matches!(Client::new("not a url"), Err(Error::Url(_))));
    }

    #[test]
    fn test_retry_policy() {
        let client = Client::new("http://localhost:3000").unwrap();
        assert_eq!(client.retry_policy(), RetryPolicy::default());
        assert_eq!(client.retry_policy().max_attempts, 1);
        assert!(!client.retry_policy().retry_non_idempotent);

        let policy = RetryPolicy {
            max_attempts: 3,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
            retry_non_idempotent: true,
        };
        let client = client.with_retry_policy(policy);
        assert_eq!(client.retry_policy(), policy);
    }

    #[tokio::test]
    async fn test_connect_failure_after_retries() {
        // Reserve a port and release it so nothing is listening there.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::new(&format!("http://{addr}"))
            .unwrap()
            .with_retry_policy(RetryPolicy {
                max_attempts: 3,
                initial_backoff: Duration::ZERO,
                max_backoff: Duration::ZERO,
                retry_non_idempotent: true,
            });
        match client.start().await {
            Err(Error::Reqwest(err)) => assert!(err.is_connect()),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
