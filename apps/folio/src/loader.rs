//! Fetches the raw document, parses it and validates it. This is the only
//! asynchronous boundary; a load is one shot with no streaming and no retry.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use crate::errors::LoadError;
use crate::labels::{audit_labels, LabelAudit};
use crate::models::Document;
use crate::validation::{date_warnings, validate};

/// Where the raw document bytes come from.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;

    /// Human-readable location, for logs and messages.
    fn describe(&self) -> String;
}

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
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(LoadError::NotFound(self.path.clone()))
            }
            Err(e) => Err(LoadError::Io(e)),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LoadError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Picks an HTTP source for `http(s)://` locations, a file source otherwise.
pub fn source_for(location: &str, timeout: Duration) -> Result<Box<dyn DocumentSource>, LoadError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

/// A validated document plus the data-quality findings made while loading it.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub document: Document,
    pub audit: LabelAudit,
    /// Label-audit warnings followed by date warnings.
    pub warnings: Vec<String>,
}

/// Parses and validates raw bytes.
pub fn parse_document(bytes: &[u8]) -> Result<LoadedDocument, LoadError> {
    let raw: serde_json::Value = serde_json::from_slice(bytes)?;
    let document = validate(&raw)?;

    let audit = audit_labels(&document);
    let mut warnings = audit.warnings();
    warnings.extend(date_warnings(&document));

    Ok(LoadedDocument {
        document,
        audit,
        warnings,
    })
}

pub async fn load_document(source: &dyn DocumentSource) -> Result<LoadedDocument, LoadError> {
    info!("Loading resume data from {}", source.describe());

    let bytes = source.fetch().await?;
    let loaded = parse_document(&bytes)?;

    for warning in &loaded.warnings {
        warn!("{warning}");
    }
    info!(
        "Loaded resume for {} ({} warnings)",
        loaded.document.profile.name,
        loaded.warnings.len()
    );

    Ok(loaded)
}
