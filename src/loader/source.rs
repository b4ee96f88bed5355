// loader/source.rs
use crate::loader::LoadError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL};
use serde_json::Value;
use std::path::PathBuf;

const USER_AGENT: &str = concat!("vacancy-calendar/", env!("CARGO_PKG_VERSION"));

/// Somewhere a JSON document can be read from.
pub trait DocumentSource: Send + Sync {
    fn fetch_json(&self, location: &str) -> Result<Value, LoadError>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, LoadError> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| LoadError::Network {
                url: "<client>".into(),
                msg: e.to_string(),
            })?;

        Ok(Self { client })
    }
}

impl DocumentSource for HttpSource {
    fn fetch_json(&self, url: &str) -> Result<Value, LoadError> {
        let resp = self.client.get(url).send().map_err(|e| LoadError::Network {
            url: url.to_string(),
            msg: e.to_string(),
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let text = resp.text().map_err(|e| LoadError::Network {
            url: url.to_string(),
            msg: e.to_string(),
        })?;

        serde_json::from_str(&text).map_err(|e| LoadError::Json {
            url: url.to_string(),
            msg: e.to_string(),
        })
    }
}

/// Reads documents from a local directory; `location` is relative to it.
pub struct FileSource {
    base_dir: PathBuf,
}

impl FileSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl DocumentSource for FileSource {
    fn fetch_json(&self, location: &str) -> Result<Value, LoadError> {
        let path = self.base_dir.join(location.trim_start_matches("./"));
        let shown = path.display().to_string();

        let text = std::fs::read_to_string(&path).map_err(|e| LoadError::Io {
            path: shown.clone(),
            msg: e.to_string(),
        })?;

        serde_json::from_str(&text).map_err(|e| LoadError::Json {
            url: shown,
            msg: e.to_string(),
        })
    }
}
