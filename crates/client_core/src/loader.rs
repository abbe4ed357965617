//! Fetching and parsing of the people dataset.
//!
//! Every call re-reads the source; nothing is cached between queries and
//! failures are returned as-is without retry or fallback data.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use reqwest::Client;
use shared::domain::{PeopleDocument, Person};
use tracing::debug;
use url::Url;

use crate::error::LoadError;

/// Well-known dataset name, resolved relative to the application.
pub const DEFAULT_DATA_SOURCE: &str = "FriendsAndFamily.json";

#[async_trait]
pub trait PeopleSource: Send + Sync {
    async fn load_people(&self) -> Result<Vec<Person>, LoadError>;

    /// Human readable location, used in logs and error messages.
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataLocation {
    Remote(Url),
    Local(PathBuf),
}

impl DataLocation {
    /// Interprets `raw` as an http(s) URL when it has such a scheme, otherwise
    /// as a filesystem path. Relative paths are resolved against `base_dir`.
    pub fn resolve(raw: &str, base_dir: &Path) -> Self {
        let raw = raw.trim();
        if let Ok(url) = Url::parse(raw) {
            if matches!(url.scheme(), "http" | "https") {
                return Self::Remote(url);
            }
        }

        let path = Path::new(if raw.is_empty() { DEFAULT_DATA_SOURCE } else { raw });
        if path.is_absolute() {
            Self::Local(path.to_path_buf())
        } else {
            Self::Local(base_dir.join(path))
        }
    }

    pub fn into_source(self) -> Arc<dyn PeopleSource> {
        match self {
            Self::Remote(url) => Arc::new(HttpPeopleSource::new(url)),
            Self::Local(path) => Arc::new(FilePeopleSource::new(path)),
        }
    }
}

impl fmt::Display for DataLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Extracts the `people` array from a raw JSON document.
pub fn parse_people(bytes: &[u8], location: &str) -> Result<Vec<Person>, LoadError> {
    let document = PeopleDocument::from_slice(bytes).map_err(|source| LoadError::Parse {
        location: location.to_string(),
        source,
    })?;
    Ok(document.people)
}

pub struct HttpPeopleSource {
    http: Client,
    url: Url,
}

impl HttpPeopleSource {
    pub fn new(url: Url) -> Self {
        Self {
            http: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl PeopleSource for HttpPeopleSource {
    async fn load_people(&self) -> Result<Vec<Person>, LoadError> {
        let url = self.url.to_string();
        let fetch_err = |source| LoadError::Fetch {
            url: url.clone(),
            source,
        };

        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(fetch_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.clone(),
                status,
            });
        }
        let body = response.bytes().await.map_err(fetch_err)?;
        debug!(url = %url, bytes = body.len(), "fetched people dataset");
        parse_people(&body, &url)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

pub struct FilePeopleSource {
    path: PathBuf,
}

impl FilePeopleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PeopleSource for FilePeopleSource {
    async fn load_people(&self) -> Result<Vec<Person>, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Read {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read people dataset");
        parse_people(&bytes, &self.path.display().to_string())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
