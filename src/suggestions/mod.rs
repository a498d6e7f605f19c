pub mod classifier;
mod dto;
pub mod handlers;
mod services;

use crate::state::AppState;
use axum::Router;

pub use classifier::{classify, BucketEntry, Classification, Tier};
pub use dto::Suggestions;
pub use services::classify_for;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::read_routes())
        .merge(handlers::write_routes())
}
