use ammonia::clean_text;

use crate::search::highlight::{Highlighted, Highlighter};
use crate::models::document::IndexedDocument;

/// View data for one matching document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResult {
    pub url: String,
    pub title: Highlighted,
    pub excerpt: Highlighted,
    pub category: String,
    pub tags: Vec<Highlighted>,
}

impl RenderedResult {
    pub fn new(doc: &IndexedDocument, highlighter: &Highlighter, excerpt_chars: usize) -> Self {
        Self {
            url: doc.url.clone(),
            title: highlighter.highlight(&doc.title),
            excerpt: highlighter.highlight(&doc.excerpt_or_preview(excerpt_chars)),
            category: doc.category.clone(),
            tags: doc.tags().iter().map(|t| highlighter.highlight(t)).collect(),
        }
    }

    pub fn to_html(&self) -> String {
        let tags: String = self
            .tags
            .iter()
            .map(|t| format!(r#"<span class="badge search-tag">{}</span>"#, t.to_html()))
            .collect();

        format!(
            r#"<div class="search-result"><a href="{url}"><div class="search-result-title">{title}</div><div class="search-result-excerpt">{excerpt}</div><div class="mt-1"><span class="badge bg-blue-lt border border-blue">{category}</span>{tags}</div></a></div>"#,
            url = clean_text(&self.url),
            title = self.title.to_html(),
            excerpt = self.excerpt.to_html(),
            category = clean_text(&self.category),
        )
    }
}

/// What the results container shows after a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No active query: the container is emptied.
    #[default]
    Cleared,
    /// Active query without a single match.
    NoResults { query: String },
    /// Matching documents in index order, already truncated.
    Matches(Vec<RenderedResult>),
}

impl SearchOutcome {
    /// Number of rendered results.
    pub fn len(&self) -> usize {
        match self {
            SearchOutcome::Matches(results) => results.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Markup for the results container. Every interpolated value is escaped.
    pub fn to_html(&self) -> String {
        match self {
            SearchOutcome::Cleared => String::new(),
            SearchOutcome::NoResults { query } => format!(
                r#"<div class="search-result"><p class="text-muted">No results found for "{}"</p></div>"#,
                clean_text(query)
            ),
            SearchOutcome::Matches(results) => results.iter().map(RenderedResult::to_html).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, url: &str) -> IndexedDocument {
        IndexedDocument {
            title: title.to_string(),
            content: "body".to_string(),
            category: "guides".to_string(),
            url: url.to_string(),
            tags: Some(vec!["linux".to_string()]),
            excerpt: None,
        }
    }

    #[test]
    fn test_cleared_renders_nothing() {
        assert_eq!(SearchOutcome::Cleared.to_html(), "");
        assert!(SearchOutcome::Cleared.is_empty());
    }

    #[test]
    fn test_no_results_message() {
        let html = SearchOutcome::NoResults { query: "zz".into() }.to_html();
        assert!(html.contains(r#"No results found for "zz""#));
    }

    #[test]
    fn test_no_results_query_is_escaped() {
        let html = SearchOutcome::NoResults {
            query: "<img src=x onerror=alert(1)>".into(),
        }
        .to_html();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
    }

    #[test]
    fn test_result_markup() {
        let result = RenderedResult::new(&doc("Linux Basics", "/linux"), &Highlighter::new("linux"), 150);
        let html = result.to_html();
        assert!(html.starts_with(r#"<div class="search-result"><a href="&#47;linux">"#));
        assert!(html.contains(r#"<mark class="search-highlight">Linux</mark>"#));
        assert!(html.contains(r#"<span class="badge search-tag"><mark class="search-highlight">linux</mark></span>"#));
        assert!(html.contains(">guides</span>"));
        assert!(html.contains(r#"<div class="search-result-excerpt">body...</div>"#));
    }

    #[test]
    fn test_url_cannot_break_out_of_attribute() {
        let result = RenderedResult::new(
            &doc("t", r#"/x" onclick="alert(1)"#),
            &Highlighter::new("zz"),
            150,
        );
        let html = result.to_html();
        assert!(!html.contains(r#"" onclick=""#));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn test_matches_concatenate_results() {
        let highlighter = Highlighter::new("li");
        let outcome = SearchOutcome::Matches(vec![
            RenderedResult::new(&doc("Linux", "/a"), &highlighter, 150),
            RenderedResult::new(&doc("Lint", "/b"), &highlighter, 150),
        ]);
        assert_eq!(outcome.len(), 2);
        assert_eq!(outcome.to_html().matches(r#"<div class="search-result">"#).count(), 2);
    }
}
