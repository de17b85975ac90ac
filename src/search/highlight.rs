use regex::{Regex, RegexBuilder};

/// A piece of highlighted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub marked: bool,
}

/// Text split into marked and unmarked fragments.
///
/// Concatenating the fragments always yields the original text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlighted(pub Vec<Fragment>);

impl Highlighted {
    /// The original text, without markers.
    pub fn plain_text(&self) -> String {
        self.0.iter().map(|f| f.text.as_str()).collect()
    }

    pub fn has_marks(&self) -> bool {
        self.0.iter().any(|f| f.marked)
    }

    /// Escaped markup with every marked fragment wrapped in
    /// `<mark class="search-highlight">`.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for fragment in &self.0 {
            let escaped = ammonia::clean_text(&fragment.text);
            if fragment.marked {
                html.push_str(r#"<mark class="search-highlight">"#);
                html.push_str(&escaped);
                html.push_str("</mark>");
            } else {
                html.push_str(&escaped);
            }
        }
        html
    }
}

/// Case-insensitive matcher for a literal query.
///
/// Regex metacharacters in the query are escaped, so `c++` or `a.b`
/// match only themselves.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        let pattern = if query.is_empty() {
            None
        } else {
            match RegexBuilder::new(&regex::escape(query))
                .case_insensitive(true)
                .build()
            {
                Ok(re) => Some(re),
                Err(e) => {
                    // Only reachable for queries exceeding the regex size limit.
                    tracing::warn!("Highlight pattern rejected: {e}");
                    None
                }
            }
        };
        Self { pattern }
    }

    pub fn highlight(&self, text: &str) -> Highlighted {
        let Some(pattern) = &self.pattern else {
            return Highlighted(plain(text));
        };

        let mut fragments = Vec::new();
        let mut last = 0;
        for m in pattern.find_iter(text) {
            if m.start() > last {
                fragments.push(Fragment {
                    text: text[last..m.start()].to_string(),
                    marked: false,
                });
            }
            fragments.push(Fragment {
                text: m.as_str().to_string(),
                marked: true,
            });
            last = m.end();
        }
        if last < text.len() || fragments.is_empty() {
            fragments.push(Fragment {
                text: text[last..].to_string(),
                marked: false,
            });
        }
        Highlighted(fragments)
    }
}

fn plain(text: &str) -> Vec<Fragment> {
    vec![Fragment {
        text: text.to_string(),
        marked: false,
    }]
}

/// Highlight every case-insensitive occurrence of `query` in `text`.
pub fn highlight(text: &str, query: &str) -> Highlighted {
    Highlighter::new(query).highlight(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_all_occurrences_case_insensitively() {
        let h = highlight("Docker docs: doc", "doc");
        let marked: Vec<_> = h.0.iter().filter(|f| f.marked).map(|f| f.text.as_str()).collect();
        assert_eq!(marked, vec!["Doc", "doc", "doc"]);
        assert_eq!(h.plain_text(), "Docker docs: doc");
    }

    #[test]
    fn test_html_output() {
        let html = highlight("Docker", "doc").to_html();
        assert_eq!(html, r#"<mark class="search-highlight">Doc</mark>ker"#);
    }

    #[test]
    fn test_no_match_is_single_plain_fragment() {
        let h = highlight("Kubernetes", "zz");
        assert!(!h.has_marks());
        assert_eq!(h.0.len(), 1);
        assert_eq!(h.to_html(), "Kubernetes");
    }

    #[test]
    fn test_empty_query_leaves_text_alone() {
        let h = highlight("anything", "");
        assert!(!h.has_marks());
        assert_eq!(h.plain_text(), "anything");
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let h = highlight("use c++ or c and a.b not axb", "c++");
        let marked: Vec<_> = h.0.iter().filter(|f| f.marked).map(|f| f.text.as_str()).collect();
        assert_eq!(marked, vec!["c++"]);

        let h = highlight("a.b not axb", "a.b");
        let marked: Vec<_> = h.0.iter().filter(|f| f.marked).map(|f| f.text.as_str()).collect();
        assert_eq!(marked, vec!["a.b"]);

        let h = highlight("(group) [set] $end", "(gr");
        assert!(h.has_marks());
    }

    #[test]
    fn test_markup_in_text_is_escaped() {
        let html = highlight("<script>alert(1)</script>", "script").to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;"));
        assert!(html.contains(r#"<mark class="search-highlight">script</mark>"#));
    }

    #[test]
    fn test_markup_in_query_is_escaped() {
        let html = highlight("a <b> tag", "<b>").to_html();
        assert!(html.contains(r#"<mark class="search-highlight">&lt;b&gt;</mark>"#));
    }

    #[test]
    fn test_rehighlighting_plain_text_is_idempotent() {
        let once = highlight("Docker Basics and docker tips", "dock");
        let twice = highlight(&once.plain_text(), "dock");
        assert_eq!(once.to_html(), twice.to_html());
    }

    #[test]
    fn test_adjacent_matches() {
        let h = highlight("aaaa", "aa");
        assert_eq!(h.0.len(), 2);
        assert!(h.0.iter().all(|f| f.marked));
    }
}
