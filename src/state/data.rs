/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the loaders and the UI layer. Everything here is read-only
/// once loaded.

use serde::Deserialize;

/// Represents a single photo in an image catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageItem {
    /// Unique token (e.g., "decoration-3")
    pub id: String,
    /// Human readable caption derived from the filename
    #[serde(default)]
    pub caption: Option<String>,
    /// Site-relative path ("/decoration/bar.jpg") or absolute http(s) URL
    pub url: String,
    /// Facet used by the gallery filter bar
    #[serde(default)]
    pub category: Option<String>,
}

impl ImageItem {
    /// Build an uncategorised item
    pub fn new(id: &str, caption: &str, url: &str) -> Self {
        Self {
            id: id.to_string(),
            caption: Some(caption.to_string()),
            url: url.to_string(),
            category: None,
        }
    }

    /// Attach a category
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Caption to show, with the venue name as the fallback alt text
    pub fn display_caption(&self) -> &str {
        self.caption.as_deref().unwrap_or("Carolina image")
    }
}

/// A single entry of the events listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventItem {
    pub id: &'static str,
    pub title: &'static str,
    /// Preformatted friendly date/time label
    pub date_label: &'static str,
    pub excerpt: &'static str,
    pub full_description: Option<&'static str>,
    pub venue: Option<&'static str>,
    pub tag: Option<&'static str>,
    /// Remote artwork URL
    pub image: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_to_none() {
        let item: ImageItem =
            serde_json::from_str(r#"{"id":"decoration-1","url":"/decoration/a.jpg"}"#).unwrap();

        assert_eq!(item.caption, None);
        assert_eq!(item.category, None);
        assert_eq!(item.display_caption(), "Carolina image");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let item: ImageItem = serde_json::from_str(
            r#"{"id":"a","url":"/a.jpg","caption":"Neon Bar","category":"Bar","width":1200}"#,
        )
        .unwrap();

        assert_eq!(item, ImageItem::new("a", "Neon Bar", "/a.jpg").with_category("Bar"));
    }
}
