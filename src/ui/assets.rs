/// Image sources for catalog cards and event artwork
///
/// Catalog URLs are site-relative ("/decoration/bar.jpg") and resolve
/// against the public directory. Event artwork lives on remote hosts and
/// is downloaded once per session.

use iced::widget::image::Handle;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Whether a URL points off-site
pub fn is_remote(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Resolve a site-relative URL to a file under the public directory
pub fn local_path(public_dir: &Path, url: &str) -> PathBuf {
    public_dir.join(url.trim_start_matches('/'))
}

/// Location handed to the browser by "Download"
pub fn download_target(public_dir: &Path, url: &str) -> String {
    if is_remote(url) {
        return url.to_string();
    }

    let path = local_path(public_dir, url);
    std::fs::canonicalize(&path)
        .ok()
        .and_then(|absolute| url::Url::from_file_path(absolute).ok())
        .map(|file_url| file_url.to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Download remote artwork bytes
pub async fn fetch_remote(url: String) -> Result<Vec<u8>, AssetError> {
    let response = reqwest::get(&url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

/// Download remote artwork into an image handle. Failures are logged.
pub async fn fetch_handle(url: String) -> Option<Handle> {
    match fetch_remote(url.clone()).await {
        Ok(bytes) => {
            tracing::debug!(size = bytes.len(), "artwork fetched: {url}");
            Some(Handle::from_bytes(bytes))
        }
        Err(err) => {
            tracing::warn!("⚠️  Could not fetch artwork {url}: {err}");
            None
        }
    }
}

/// Session cache of remote artwork
#[derive(Debug, Default)]
pub struct Artwork {
    handles: HashMap<String, Handle>,
    requested: bool,
}

impl Artwork {
    /// URLs still to fetch; only the first call returns anything
    pub fn take_requests<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        if self.requested {
            return Vec::new();
        }
        self.requested = true;
        urls.into_iter().filter(|url| is_remote(url)).map(str::to_string).collect()
    }

    pub fn insert(&mut self, url: String, handle: Handle) {
        self.handles.insert(url, handle);
    }

    /// Image handle for any catalog or artwork URL, if available yet
    pub fn handle(&self, public_dir: &Path, url: &str) -> Option<Handle> {
        if is_remote(url) {
            self.handles.get(url).cloned()
        } else {
            Some(Handle::from_path(local_path(public_dir, url)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_path_strips_leading_slash() {
        assert_eq!(
            local_path(Path::new("public"), "/decoration/neon_bar.jpg"),
            PathBuf::from("public/decoration/neon_bar.jpg")
        );
    }

    #[test]
    fn test_download_target_for_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("decoration")).unwrap();
        std::fs::write(dir.path().join("decoration/deck.jpg"), b"jpeg").unwrap();

        let target = download_target(dir.path(), "/decoration/deck.jpg");

        assert!(target.starts_with("file://"));
        assert!(target.ends_with("/decoration/deck.jpg"));
    }

    #[test]
    fn test_download_target_for_remote_url() {
        let url = "https://cdn.example.com/a.jpg";
        assert_eq!(download_target(Path::new("public"), url), url);
    }

    #[test]
    fn test_artwork_requests_once() {
        let mut artwork = Artwork::default();
        let urls = ["https://cdn.example.com/a.jpg", "/decoration/b.jpg"];

        assert_eq!(artwork.take_requests(urls), vec!["https://cdn.example.com/a.jpg"]);
        assert!(artwork.take_requests(urls).is_empty());
    }

    #[test]
    fn test_remote_handle_missing_until_fetched() {
        let mut artwork = Artwork::default();
        let url = "https://cdn.example.com/a.jpg";

        assert!(artwork.handle(Path::new("public"), url).is_none());
        artwork.insert(url.to_string(), Handle::from_bytes(vec![0u8; 4]));
        assert!(artwork.handle(Path::new("public"), url).is_some());
        assert!(artwork.handle(Path::new("public"), "/decoration/b.jpg").is_some());
    }
}
