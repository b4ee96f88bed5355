use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_VACANCY_URL: &str =
    "https://hotelcalendarstorage.blob.core.windows.net/results/vacancy.json";
pub const DEFAULT_HOTELS_URL: &str =
    "https://hotelcalendarstorage.blob.core.windows.net/config/hotelNos.json";

/// Local copies used when the remote fetch fails.
pub const LOCAL_HOTELS_PATH: &str = "./hotels.json";
pub const LOCAL_VACANCY_PATH: &str = "./vacancy.json";

/// Query parameters that choose the data sources.
pub const OVERRIDE_KEYS: [&str; 2] = ["vacancy", "hotels"];

/// Decoded query-string parameters.
pub type QueryParams = HashMap<String, String>;

/// Dashboard configuration, read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub vacancy_url: String,
    pub hotels_url: String,
    /// Honour `vacancy=` / `hotels=` query parameters; off unless set,
    /// since the server itself fetches whatever URL they name
    pub allow_source_override: bool,
    /// Try `fallback_dir` when a remote fetch fails
    pub fallback_local: bool,
    pub fallback_dir: PathBuf,
    /// Months after the current one the calendar extends to
    pub months_ahead: u32,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
}

/// Where one load reads its two documents from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrls {
    pub hotels: String,
    pub vacancy: String,
    pub hotels_fallback: String,
    pub vacancy_fallback: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vacancy_url: DEFAULT_VACANCY_URL.to_string(),
            hotels_url: DEFAULT_HOTELS_URL.to_string(),
            allow_source_override: false,
            fallback_local: true,
            fallback_dir: PathBuf::from("data"),
            months_ahead: 5,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or unparsable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            vacancy_url: lookup("VACANCY_JSON_URL").unwrap_or(defaults.vacancy_url),
            hotels_url: lookup("HOTELS_JSON_URL").unwrap_or(defaults.hotels_url),
            allow_source_override: parse_or(
                &lookup,
                "ALLOW_SOURCE_OVERRIDE",
                defaults.allow_source_override,
            ),
            fallback_local: parse_or(&lookup, "FALLBACK_LOCAL", defaults.fallback_local),
            fallback_dir: lookup("FALLBACK_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.fallback_dir),
            months_ahead: parse_or(&lookup, "MONTHS_AHEAD", defaults.months_ahead),
            bind_addr: parse_or(&lookup, "BIND_ADDR", defaults.bind_addr),
            max_workers: parse_or(&lookup, "MAX_WORKERS", defaults.max_workers),
        }
    }

    /// The non-empty `vacancy=` / `hotels=` values in `params`, or nothing
    /// when overrides are disabled.
    pub fn source_overrides(&self, params: &QueryParams) -> Vec<(String, String)> {
        let requested: Vec<(String, String)> = OVERRIDE_KEYS
            .iter()
            .filter_map(|k| {
                params
                    .get(*k)
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
                    .map(|v| (k.to_string(), v.to_string()))
            })
            .collect();

        if !self.allow_source_override && !requested.is_empty() {
            warn!("Ignoring source override {requested:?}: ALLOW_SOURCE_OVERRIDE is off");
            return Vec::new();
        }
        requested
    }

    /// Document locations for one load; allowed `vacancy=` and `hotels=`
    /// overrides take precedence over the configured URLs.
    pub fn source_urls(&self, params: &QueryParams) -> SourceUrls {
        let overrides = self.source_overrides(params);
        let pick = |key: &str, default: &str| {
            overrides
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .unwrap_or(default)
                .to_string()
        };

        SourceUrls {
            hotels: pick("hotels", &self.hotels_url),
            vacancy: pick("vacancy", &self.vacancy_url),
            hotels_fallback: LOCAL_HOTELS_PATH.to_string(),
            vacancy_fallback: LOCAL_VACANCY_PATH.to_string(),
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring unparsable {key}={raw:?}");
            default
        }),
    }
}
