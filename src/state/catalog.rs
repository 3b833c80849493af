use std::path::{Path, PathBuf};

use thiserror::Error;

use super::data::ImageItem;

/// Errors that can occur while reading a catalog JSON file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The image feeds shown across the app.
///
/// Each feed reads its own JSON file from the public directory and has
/// its own static default used when that file cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    /// Home page "Inside the Carolina Experience" strip
    Decoration,
    /// Home page atmosphere strip
    Atmosphere,
    /// Filterable gallery screen
    Gallery,
}

impl Feed {
    /// File name of the catalog, relative to the public directory
    pub fn file_name(self) -> &'static str {
        match self {
            Feed::Decoration | Feed::Gallery => "decoration-images.json",
            Feed::Atmosphere => "atmosphere.json",
        }
    }

    /// Static default used when the catalog is missing or invalid
    pub fn fallback(self) -> Vec<ImageItem> {
        match self {
            Feed::Decoration => vec![ImageItem::new(
                "fallback-1",
                "Rooftop",
                "/decoration/fallback-1.jpg",
            )],
            Feed::Atmosphere => vec![
                ImageItem::new("fallback-1", "Rooftop Deck", "/decoration/fallback-1.jpg"),
                ImageItem::new("fallback-2", "Neon Bar", "/decoration/fallback-2.jpg"),
                ImageItem::new("fallback-3", "Lounge Seating", "/decoration/fallback-3.jpg"),
            ],
            // The gallery shows an empty state instead of placeholders
            Feed::Gallery => Vec::new(),
        }
    }
}

/// Outcome of loading a feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Parsed from the catalog file
    Loaded(Vec<ImageItem>),
    /// The feed's static default
    Default(Vec<ImageItem>),
}

impl CatalogSource {
    #[cfg(test)]
    pub fn items(&self) -> &[ImageItem] {
        match self {
            CatalogSource::Loaded(items) | CatalogSource::Default(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<ImageItem> {
        match self {
            CatalogSource::Loaded(items) | CatalogSource::Default(items) => items,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, CatalogSource::Default(_))
    }
}

/// Read and parse a catalog file
pub async fn read_catalog(path: &Path) -> Result<Vec<ImageItem>, CatalogError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Attempt to load a feed, else use its static default.
///
/// Never fails: load errors are logged and replaced by the default.
pub async fn load_feed(public_dir: PathBuf, feed: Feed) -> CatalogSource {
    let path = public_dir.join(feed.file_name());

    match read_catalog(&path).await {
        Ok(items) => {
            tracing::info!(?feed, count = items.len(), "📁 Catalog loaded from {}", path.display());
            CatalogSource::Loaded(items)
        }
        Err(err) => {
            tracing::warn!(?feed, "⚠️  {err}; using static default");
            CatalogSource::Default(feed.fallback())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_load_valid_catalog() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("decoration-images.json"),
            r#"[
                {"id":"decoration-1","caption":"bar night","url":"/decoration/bar_night.jpg"},
                {"id":"decoration-2","url":"/decoration/deck.png","category":"Rooftop"}
            ]"#,
        )
        .unwrap();

        let source = load_feed(dir.path().to_path_buf(), Feed::Gallery).await;

        assert!(!source.is_default());
        assert_eq!(source.items().len(), 2);
        assert_eq!(source.items()[1].category.as_deref(), Some("Rooftop"));
    }

    #[tokio::test]
    async fn test_missing_catalog_uses_default() {
        let dir = tempfile::tempdir().unwrap();

        let atmosphere = load_feed(dir.path().to_path_buf(), Feed::Atmosphere).await;
        let gallery = load_feed(dir.path().to_path_buf(), Feed::Gallery).await;

        assert!(atmosphere.is_default());
        assert_eq!(atmosphere.items().len(), 3);
        assert!(gallery.is_default());
        assert!(gallery.items().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("decoration-images.json"), "{ not json").unwrap();

        let source = load_feed(dir.path().to_path_buf(), Feed::Decoration).await;

        assert_eq!(source, CatalogSource::Default(Feed::Decoration.fallback()));
    }

    #[tokio::test]
    async fn test_read_catalog_reports_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atmosphere.json");
        fs::write(&path, r#"[{"caption":"no id or url"}]"#).unwrap();

        let err = read_catalog(&path).await.unwrap_err();

        assert!(matches!(err, CatalogError::Json { .. }));
    }
}
