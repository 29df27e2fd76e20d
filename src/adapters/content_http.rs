//! Content provider fetching JSON records from a web server.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::content::{ABOUT_FILE, CHURCH_INFO_FILE, CONTACT_FILE};
use crate::domain::{AboutContent, AppError, ChurchKnowledge, ContactContent};
use crate::ports::ContentProvider;

const CONTENT_TIMEOUT_SECS: u64 = 10;

/// Fetches `<base>/<record>.json` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpContentProvider {
    base: Url,
    client: Client,
}

impl HttpContentProvider {
    pub fn new(base: Url) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(CONTENT_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base: with_trailing_slash(base), client })
    }

    fn fetch_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, AppError> {
        let url = self.base.join(name).map_err(|e| AppError::content_load(name, e))?;

        let response =
            self.client.get(url.clone()).send().map_err(|e| AppError::content_load(name, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::content_load(name, format!("{} returned {}", url, status)));
        }

        let body = response.text().map_err(|e| AppError::content_load(name, e))?;
        serde_json::from_str(&body).map_err(|e| AppError::content_load(name, e))
    }
}

fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

impl ContentProvider for HttpContentProvider {
    fn about(&self) -> Result<AboutContent, AppError> {
        self.fetch_json(ABOUT_FILE)
    }

    fn contact(&self) -> Result<ContactContent, AppError> {
        self.fetch_json(CONTACT_FILE)
    }

    fn church_info(&self) -> Result<ChurchKnowledge, AppError> {
        self.fetch_json(CHURCH_INFO_FILE)
    }
}
