use crate::{Error, RateLimit, Service};
use axum::{
    extract::{Path, State},
    http::{header, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use blackjack_types::{api::GameState, API_PREFIX};
use std::sync::Arc;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::cors::{Any, CorsLayer};

pub struct Api {
    service: Arc<Service>,
    rate_limit: Option<RateLimit>,
}

impl Api {
    pub fn new(service: Arc<Service>, rate_limit: Option<RateLimit>) -> Self {
        Self {
            service,
            rate_limit,
        }
    }

    pub fn router(&self) -> Router {
        // Configure CORS
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);

        let game = Router::new()
            .route("/game", post(start))
            .route("/game/:id/hit", post(hit))
            .route("/game/:id/stand", post(stand));

        let router = Router::new()
            .nest(API_PREFIX, game)
            .route("/health", get(health))
            .layer(cors);

        // Configure Rate Limiting
        let router = match self.rate_limit {
            Some(limit) => {
                let config = GovernorConfigBuilder::default()
                    .per_second(limit.per_second)
                    .burst_size(limit.burst)
                    .key_extractor(SmartIpKeyExtractor)
                    .finish();
                match config {
                    Some(config) => router.layer(GovernorLayer {
                        config: Arc::new(config),
                    }),
                    None => {
                        tracing::warn!(?limit, "invalid rate limit, serving without one");
                        router
                    }
                }
            }
            None => router,
        };

        router.with_state(self.service.clone())
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn start(
    State(service): State<Arc<Service>>,
) -> Result<(StatusCode, Json<GameState>), Error> {
    Ok((StatusCode::CREATED, Json(service.start()?)))
}

async fn hit(
    State(service): State<Arc<Service>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<GameState>), Error> {
    Ok((StatusCode::CREATED, Json(service.hit(&id)?)))
}

async fn stand(
    State(service): State<Arc<Service>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<GameState>), Error> {
    Ok((StatusCode::CREATED, Json(service.stand(&id)?)))
}
