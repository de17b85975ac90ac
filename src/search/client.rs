use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::SearchConfig;
use crate::error::AppError;
use crate::models::document::IndexedDocument;
use crate::search::filter::{is_active_query, SearchIndex};
use crate::search::loader::IndexLoader;
use crate::search::render::SearchOutcome;
use crate::timer::{Debouncer, Timer};

/// Coarse state of the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    /// No index loaded yet, or no active query.
    Idle,
    /// Index loaded and results rendered for an active query.
    Ready,
}

struct ClientInner {
    config: SearchConfig,
    index: RefCell<SearchIndex>,
    loaded: Cell<bool>,
    query: RefCell<String>,
    render: Box<dyn Fn(&SearchOutcome)>,
}

impl ClientInner {
    fn run_query(&self, query: String) -> SearchOutcome {
        let outcome = self.index.borrow().search(&query, &self.config);
        tracing::debug!(query = %query, results = outcome.len(), "search");
        *self.query.borrow_mut() = query;
        (self.render)(&outcome);
        outcome
    }
}

/// Owns the search index, the current query and the keystroke debouncer.
///
/// Rendering goes through the callback given to [`SearchIndexClient::new`],
/// so the client itself never touches the DOM. Clones share state.
pub struct SearchIndexClient<T: Timer> {
    inner: Rc<ClientInner>,
    debouncer: Rc<Debouncer<T, String>>,
}

impl<T: Timer> Clone for SearchIndexClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            debouncer: Rc::clone(&self.debouncer),
        }
    }
}

impl<T: Timer> SearchIndexClient<T> {
    pub fn new(config: SearchConfig, timer: T, render: impl Fn(&SearchOutcome) + 'static) -> Self {
        let wait = config.debounce();
        let inner = Rc::new(ClientInner {
            config,
            index: RefCell::new(SearchIndex::default()),
            loaded: Cell::new(false),
            query: RefCell::new(String::new()),
            render: Box::new(render),
        });

        let weak: Weak<ClientInner> = Rc::downgrade(&inner);
        let debouncer = Debouncer::new(timer, wait, move |query: String| {
            if let Some(inner) = weak.upgrade() {
                inner.run_query(query);
            }
        });

        Self {
            inner,
            debouncer: Rc::new(debouncer),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.inner.config
    }

    /// Fetch the index once. Failures are logged and leave the index empty.
    pub async fn load<L: IndexLoader + ?Sized>(&self, loader: &L) {
        let result = loader.fetch().await;
        self.on_load_complete(result);
    }

    /// Install the outcome of an index fetch.
    pub fn on_load_complete(&self, result: Result<Vec<IndexedDocument>, AppError>) {
        match result {
            Ok(documents) => {
                tracing::info!("Search index loaded with {} documents", documents.len());
                *self.inner.index.borrow_mut() = SearchIndex::new(documents);
                self.inner.loaded.set(true);

                let query = self.query();
                if is_active_query(&query, self.inner.config.min_query_chars) {
                    self.inner.run_query(query);
                }
            }
            Err(e) => {
                tracing::error!("Error loading search data: {e}");
                *self.inner.index.borrow_mut() = SearchIndex::default();
                self.inner.loaded.set(false);
            }
        }
    }

    /// Debounced entry point for input events.
    pub fn on_input(&self, value: impl Into<String>) {
        self.debouncer.trigger(value.into());
    }

    /// Run a search immediately and render its outcome.
    pub fn search(&self, query: &str) -> SearchOutcome {
        self.inner.run_query(query.to_string())
    }

    /// The query of the last search.
    pub fn query(&self) -> String {
        self.inner.query.borrow().clone()
    }

    pub fn document_count(&self) -> usize {
        self.inner.index.borrow().len()
    }

    pub fn state(&self) -> ClientState {
        let active = is_active_query(&self.inner.query.borrow(), self.inner.config.min_query_chars);
        if self.inner.loaded.get() && active {
            ClientState::Ready
        } else {
            ClientState::Idle
        }
    }

    /// Cancel pending input, drop the index and clear the output.
    pub fn dispose(&self) {
        self.debouncer.cancel();
        *self.inner.index.borrow_mut() = SearchIndex::default();
        self.inner.loaded.set(false);
        self.inner.query.borrow_mut().clear();
        (self.inner.render)(&SearchOutcome::Cleared);
    }
}
