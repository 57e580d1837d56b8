//! HTTP service for single-player blackjack.
//!
//! Every action reconstructs the round from its stored snapshot, applies one
//! move and either stores the round again or drops it once it is decided.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use blackjack_types::{api::ErrorBody, SESSION_NOT_FOUND_MESSAGE};
use thiserror::Error;

mod api;
pub use api::Api;
mod config;
pub use config::{Config, ConfigError, RateLimit, ValidatedConfig};
mod service;
pub use service::Service;
mod session;
pub use session::Sessions;
mod store;
pub use store::{MemoryStore, Store, StoreError};
mod view;
pub use view::project;

#[derive(Debug, Error)]
pub enum Error {
    #[error("session not found")]
    SessionNotFound,
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("game error: {0}")]
    Game(#[from] blackjack_types::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::SessionNotFound => StatusCode::NOT_FOUND,
            Error::Store(_) | Error::Game(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Error::SessionNotFound => SESSION_NOT_FOUND_MESSAGE.to_string(),
            other => {
                tracing::error!("request failed: {}", other);
                "Internal server error".to_string()
            }
        };
        let body = ErrorBody {
            status_code: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
