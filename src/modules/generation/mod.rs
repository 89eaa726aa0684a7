use axum::Router;
use axum::routing::post;
use crate::state::AppState;

pub mod dto;
pub mod error;
pub mod handler;
pub mod model;
pub mod poller;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/generate-video",
        post(handler::generate_video).fallback(handler::method_not_allowed),
    )
}
