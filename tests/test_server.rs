#![cfg(feature = "ssr")]

use axum_test::TestServer;
use leptos::prelude::LeptosOptions;
use leptos::server_fn::ServerFn;

use docs_search::app::GetSearchSettings;
use docs_search::config::SearchConfig;
use docs_search::search::loader::parse_index;
use docs_search::state::AppState;

const INDEX: &str = r#"[{"title":"ZFS Pools","content":"zpool create","category":"storage","url":"/zfs","tags":["zfs"]}]"#;

fn server_for(site_root: &std::path::Path) -> TestServer {
    server_with_settings(site_root, SearchConfig::default())
}

fn server_with_settings(site_root: &std::path::Path, search: SearchConfig) -> TestServer {
    let leptos_options = LeptosOptions::builder()
        .output_name("docs-search")
        .site_root(site_root.to_string_lossy().to_string())
        .build();
    let state = AppState {
        leptos_options,
        search,
    };
    TestServer::builder()
        .try_build(docs_search::server::router(state))
        .expect("Failed to build TestServer")
}

#[tokio::test]
async fn serves_search_index_from_site_root() {
    let site = tempfile::tempdir().unwrap();
    std::fs::write(site.path().join("search.json"), INDEX).unwrap();
    let server = server_for(site.path());

    let response = server.get("/search.json").await;

    response.assert_status_ok();
    let docs = parse_index(&response.text()).expect("Index should decode");
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].title, "ZFS Pools");
}

#[tokio::test]
async fn missing_index_is_not_found() {
    let site = tempfile::tempdir().unwrap();
    let server = server_for(site.path());

    let response = server.get("/search.json").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn home_page_renders_search_and_menu_elements() {
    let site = tempfile::tempdir().unwrap();
    let server = server_for(site.path());

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    for needle in [
        r#"id="search-input""#,
        r#"id="results-container""#,
        r#"id="menuBtn""#,
        r#"id="sidebar""#,
        r#"id="overlay""#,
        "menu-hotspot",
    ] {
        assert!(html.contains(needle), "missing {needle} in {html}");
    }
}

#[tokio::test]
async fn search_settings_come_from_host_config() {
    let site = tempfile::tempdir().unwrap();
    let search = SearchConfig {
        max_results: 25,
        debounce_ms: 120,
        ..SearchConfig::default()
    };
    let server = server_with_settings(site.path(), search.clone());

    let response = server
        .post(GetSearchSettings::PATH)
        .form(&GetSearchSettings {})
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<SearchConfig>(), search);
}
