#[cfg(feature = "ssr")]
#[derive(clap::Parser)]
#[command(name = "docs-search", about = "Serve the documentation site with client-side search")]
struct Args {
    /// Configuration file (TOML). Missing files are ignored.
    #[arg(long, default_value = docs_search::config::ServerConfig::DEFAULT_FILE)]
    config: std::path::PathBuf,
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use docs_search::config::ServerConfig;
    use docs_search::state::AppState;
    use leptos::prelude::get_configuration;

    let args = Args::parse();
    let config = ServerConfig::load(&args.config)?;

    docs_search::telemetry::init_server(&config.log_filter);

    tracing::info!("Starting docs-search server...");

    // Load Leptos options from Cargo.toml metadata
    let conf = get_configuration(None).context("Failed to read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    tracing::info!(
        "Serving site root {} with search index at {}",
        leptos_options.site_root,
        config.search.index_url
    );

    let app = docs_search::server::router(AppState::new(leptos_options, &config));

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

// When compiled for WASM (client-side), there's no main function.
// The hydrate() function in lib.rs handles client-side initialization.
#[cfg(not(feature = "ssr"))]
fn main() {}
