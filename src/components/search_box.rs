use leptos::html;
use leptos::prelude::*;

use crate::config::SearchConfig;
use crate::search::client::SearchIndexClient;
use crate::search::render::SearchOutcome;
use crate::timer::PageTimer;

/// Search input plus the container receiving the rendered results.
///
/// The index is fetched once after hydration; keystrokes are debounced
/// by the [`SearchIndexClient`].
#[component]
pub fn SearchBox(config: SearchConfig, input_ref: NodeRef<html::Input>) -> impl IntoView {
    let outcome = RwSignal::new(SearchOutcome::Cleared);

    let client = SearchIndexClient::new(config, PageTimer::default(), move |o: &SearchOutcome| {
        // The signal is gone once the component unmounts.
        let _ = outcome.try_set(o.clone());
    });
    let client = StoredValue::new_local(client);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use crate::search::loader::HttpIndexLoader;

        let client = client.get_value();
        let loader = HttpIndexLoader::new(client.config().index_url.clone());
        leptos::task::spawn_local(async move {
            client.load(&loader).await;
        });
    });

    on_cleanup(move || client.with_value(|c| c.dispose()));

    view! {
        <div class="search-container">
            <input
                id="search-input"
                type="search"
                placeholder="Search documentation... (Ctrl+K)"
                autocomplete="off"
                node_ref=input_ref
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    client.with_value(|c| c.on_input(value));
                }
            />
            <div
                id="results-container"
                class="search-results"
                inner_html=move || outcome.with(SearchOutcome::to_html)
            ></div>
        </div>
    }
}
