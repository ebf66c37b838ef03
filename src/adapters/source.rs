use crate::utils::error::{EtlError, Result};
use reqwest::Client;
use url::Url;

/// Where the award catalogue is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    File(String),
    Http(Url),
}

impl SourceLocation {
    /// `http://` and `https://` locations are fetched, anything else is a local path.
    pub fn parse(location: &str) -> Result<Self> {
        let location = location.trim();
        if location.is_empty() {
            return Err(EtlError::MissingConfigError {
                field: "source".to_string(),
            });
        }

        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(location).map_err(|e| EtlError::InvalidConfigValueError {
                field: "source".to_string(),
                value: location.to_string(),
                reason: format!("Invalid URL format: {}", e),
            })?;
            return Ok(SourceLocation::Http(url));
        }

        Ok(SourceLocation::File(location.to_string()))
    }

    pub async fn fetch(&self, client: &Client) -> Result<Vec<u8>> {
        match self {
            SourceLocation::File(path) => {
                tracing::debug!("Reading catalogue from file: {}", path);
                Ok(tokio::fs::read(path).await?)
            }
            SourceLocation::Http(url) => {
                tracing::debug!("Downloading catalogue from: {}", url);
                let response = client.get(url.clone()).send().await?;
                tracing::debug!("Source response status: {}", response.status());

                if !response.status().is_success() {
                    return Err(EtlError::SourceError {
                        location: url.to_string(),
                        message: format!("unexpected status {}", response.status()),
                    });
                }
                Ok(response.bytes().await?.to_vec())
            }
        }
    }
}
