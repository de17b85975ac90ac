use leptos::html;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Title};
use leptos_router::components::*;
use leptos_router::path;

use crate::components::search_box::SearchBox;
use crate::components::sidebar::Sidebar;
use crate::config::SearchConfig;

/// Server function returning the search settings of this deployment.
#[server(GetSearchSettings, "/api")]
pub async fn get_search_settings() -> Result<SearchConfig, ServerFnError> {
    let state = expect_context::<crate::state::AppState>();
    Ok(state.search.clone())
}

/// HTML document wrapping the app during server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = Resource::new(|| (), |_| get_search_settings());
    let search_input = NodeRef::<html::Input>::new();

    view! {
        <Title text="Documentation"/>

        <Router>
            <Sidebar search_input=search_input>
                <nav class="sidebar-nav">
                    <a href="/">"Home"</a>
                </nav>
            </Sidebar>
            <nav class="top-nav">
                <div class="logo">"Docs"</div>
                <Suspense fallback=|| ()>
                    {move || settings.get().map(|res| {
                        let config = res.unwrap_or_else(|e| {
                            tracing::warn!("Falling back to default search settings: {e}");
                            SearchConfig::default()
                        });
                        view! { <SearchBox config=config input_ref=search_input/> }
                    })}
                </Suspense>
            </nav>
            <main>
                <Routes fallback=|| view! { "Page not found." }.into_view()>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <h1>"Documentation"</h1>
        <p>"Press Ctrl+K to search."</p>
    }
}
