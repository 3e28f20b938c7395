/*!
 * Source document loading.
 *
 * A source is anything that can produce the raw book text once. Network and
 * status failures are fatal for the run, so there is no retry here.
 */

use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;
use std::fmt::Debug;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::document::RawDocument;
use crate::errors::FetchError;

/// Default book: "The Art of Public Speaking" on Project Gutenberg
pub const DEFAULT_BOOK_URL: &str = "https://www.gutenberg.org/cache/epub/16317/pg16317.txt";

/// Provider of the raw document text
#[async_trait]
pub trait DocumentSource: Send + Sync + Debug {
    /// Load the document, failing on any transport or status error
    async fn load(&self) -> Result<RawDocument, FetchError>;

    /// Human-readable location, used in logs
    fn location(&self) -> String;
}

/// Downloads the document with an HTTP GET
#[derive(Debug)]
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            url,
        }
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn load(&self) -> Result<RawDocument, FetchError> {
        info!("Downloading book from {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| {
                error!("Failed to download book: {}", e);
                FetchError::Request {
                    url: self.url.to_string(),
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("Failed to download book: server responded with {}", status);
            return Err(FetchError::Status {
                url: self.url.to_string(),
                status_code: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| FetchError::Request {
            url: self.url.to_string(),
            message: e.to_string(),
        })?;

        let document = RawDocument::from_bytes(&bytes);
        if document.is_empty() {
            return Err(FetchError::Empty(self.url.to_string()));
        }

        info!("Successfully downloaded book ({} characters)", document.len());
        Ok(document)
    }

    fn location(&self) -> String {
        self.url.to_string()
    }
}

/// Reads the document from a local file
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    async fn load(&self) -> Result<RawDocument, FetchError> {
        info!("Reading book from {:?}", self.path);

        let bytes = tokio::fs::read(&self.path).await.map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })?;

        let document = RawDocument::from_bytes(&bytes);
        if document.is_empty() {
            return Err(FetchError::Empty(self.path.display().to_string()));
        }

        info!("Read book ({} characters)", document.len());
        Ok(document)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick a source for a location: `http(s)` URLs are downloaded, anything else is a path
pub fn from_location(location: &str, timeout: Duration) -> Box<dyn DocumentSource> {
    match Url::parse(location) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            Box::new(HttpSource::new(url, timeout))
        }
        _ => Box::new(FileSource::new(location)),
    }
}
