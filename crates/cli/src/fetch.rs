pub(crate) mod error;

use std::fs;
use std::path::PathBuf;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::debug;

use crate::fetch::error::FetchError;
use crate::fetch::error::Result;

/// Where a payload is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PayloadSource {
    File(PathBuf),
    Url(String),
}

impl PayloadSource {
    /// Reads the payload text.
    pub fn read(&self) -> Result<String> {
        match self {
            PayloadSource::File(path) => {
                debug!(path = %path.display(), "reading payload file");
                Ok(fs::read_to_string(path)?)
            }
            PayloadSource::Url(url) => PayloadClient::new().get(url),
        }
    }
}

pub(crate) struct PayloadClient {
    client: Client,
}

impl PayloadClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn get(&self, url: &str) -> Result<String> {
        debug!(url, "fetching payload");
        let response = self.client.get(url).send()?;

        match response.status() {
            StatusCode::OK => Ok(response.text()?),
            status_code => {
                let message = response.text()?;
                let error = FetchError::Response {
                    status_code,
                    message,
                };
                Err(error)
            }
        }
    }
}

pub(crate) fn parse_source(source: &str) -> std::result::Result<PayloadSource, String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return Ok(PayloadSource::Url(source.to_string()));
    }

    let path = PathBuf::from(source);

    if !path.is_file() {
        return Err(format!("The `{}` path must point to a file.", path.display()));
    }

    Ok(PayloadSource::File(path))
}
