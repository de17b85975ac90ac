use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::app::{shell, App};
use crate::state::AppState;

/// Build the Axum router: Leptos pages and server functions, with the
/// static site (including the search index) served from the site root.
pub fn router(state: AppState) -> Router {
    let leptos_options = state.leptos_options.clone();
    let site_root = leptos_options.site_root.to_string();
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes_with_context(
            &state,
            routes,
            {
                let state = state.clone();
                move || provide_context(state.clone())
            },
            move || shell(leptos_options.clone()),
        )
        .fallback_service(ServeDir::new(&site_root))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
