use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Network error fetching {url}: {msg}")]
    Network { url: String, msg: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("JSON parse error in {url}: {msg}")]
    Json { url: String, msg: String },

    #[error("IO error reading {path}: {msg}")]
    Io { path: String, msg: String },
}
