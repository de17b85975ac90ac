use crate::config::{SearchConfig, ServerConfig};

/// Shared state of the host, available to server functions through context.
#[derive(Clone)]
pub struct AppState {
    pub leptos_options: leptos::prelude::LeptosOptions,
    pub search: SearchConfig,
}

impl axum::extract::FromRef<AppState> for leptos::prelude::LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

impl AppState {
    pub fn new(leptos_options: leptos::prelude::LeptosOptions, config: &ServerConfig) -> Self {
        Self {
            leptos_options,
            search: config.search.clone(),
        }
    }
}
