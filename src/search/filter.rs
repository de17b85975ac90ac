use crate::config::SearchConfig;
use crate::models::document::IndexedDocument;
use crate::search::highlight::Highlighter;
use crate::search::render::{RenderedResult, SearchOutcome};

/// The in-memory document set. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    documents: Vec<IndexedDocument>,
}

impl SearchIndex {
    pub fn new(documents: Vec<IndexedDocument>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[IndexedDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents containing `query` (case-insensitive) in their title,
    /// content, category or any tag, in index order.
    pub fn matching<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a IndexedDocument> + 'a {
        let needle = query.to_lowercase();
        self.documents
            .iter()
            .filter(move |doc| document_matches(doc, &needle))
    }

    /// Filter, truncate and highlight in one go.
    pub fn search(&self, query: &str, config: &SearchConfig) -> SearchOutcome {
        if !is_active_query(query, config.min_query_chars) {
            return SearchOutcome::Cleared;
        }

        let highlighter = Highlighter::new(query);
        let results: Vec<RenderedResult> = self
            .matching(query)
            .take(config.max_results)
            .map(|doc| RenderedResult::new(doc, &highlighter, config.excerpt_chars))
            .collect();

        if results.is_empty() {
            SearchOutcome::NoResults {
                query: query.to_string(),
            }
        } else {
            SearchOutcome::Matches(results)
        }
    }
}

impl From<Vec<IndexedDocument>> for SearchIndex {
    fn from(documents: Vec<IndexedDocument>) -> Self {
        Self::new(documents)
    }
}

/// Whether `query` is long enough to run a search.
pub fn is_active_query(query: &str, min_chars: usize) -> bool {
    !query.is_empty() && query.chars().count() >= min_chars
}

/// `needle` must already be lower-cased.
fn document_matches(doc: &IndexedDocument, needle: &str) -> bool {
    doc.title.to_lowercase().contains(needle)
        || doc.content.to_lowercase().contains(needle)
        || doc.category.to_lowercase().contains(needle)
        || doc.tags().iter().any(|tag| tag.to_lowercase().contains(needle))
}
