use axum::Router;
use tower_http::trace::TraceLayer;

use crate::{domains::mail::rest::mail_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .nest("/api", mail_routes())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
