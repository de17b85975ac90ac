pub mod app;
pub mod config;
pub mod error;
pub mod menu;
pub mod shortcuts;
pub mod telemetry;
pub mod timer;
pub mod models {
    pub mod document;
}
pub mod search {
    pub mod client;
    pub mod filter;
    pub mod highlight;
    pub mod loader;
    pub mod render;
}
pub mod components {
    pub mod search_box;
    pub mod sidebar;
}

#[cfg(feature = "ssr")]
pub mod server;
#[cfg(feature = "ssr")]
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    telemetry::init_browser();
    leptos::mount::hydrate_body(app::App);
}
