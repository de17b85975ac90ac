use serde::{Deserialize, Serialize};

/// One entry of the pre-built site search index (`search.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedDocument {
    pub title: String,
    pub content: String,
    pub category: String,
    pub url: String,
    /// Absent or `null` in the index for untagged pages.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Hand-written summary; the first characters of `content` are used when missing.
    #[serde(default)]
    pub excerpt: Option<String>,
}

impl IndexedDocument {
    /// Tags of the document, empty when the index carries none.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Summary shown under the result title.
    ///
    /// Falls back to the first `max_chars` characters of `content`
    /// followed by an ellipsis when the excerpt is missing or empty.
    pub fn excerpt_or_preview(&self, max_chars: usize) -> String {
        match &self.excerpt {
            Some(excerpt) if !excerpt.is_empty() => excerpt.clone(),
            _ => {
                let mut preview: String = self.content.chars().take(max_chars).collect();
                preview.push_str("...");
                preview
            }
        }
    }
}
