use axum::{Extension, Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::reports::adapters::inbound::http as reports_http;
use crate::modules::time_entries::adapters::inbound::http as time_entries_http;
use crate::shell::graphql::{graphiql, graphql, schema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = schema(state.clone());
    Router::new()
        .merge(time_entries_http::routes())
        .merge(reports_http::routes())
        .with_state(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
