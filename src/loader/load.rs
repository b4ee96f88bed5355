// loader/load.rs
use crate::config::SourceUrls;
use crate::loader::{DocumentSource, LoadError};
use serde_json::Value;
use std::time::Instant;
use tracing::{info, warn};

/// Raw registry and vacancy documents from one load.
#[derive(Debug, Clone)]
pub struct Documents {
    pub registry: Value,
    pub vacancy: Value,
}

pub struct Loader {
    primary: Box<dyn DocumentSource>,
    fallback: Option<Box<dyn DocumentSource>>,
}

impl Loader {
    pub fn new(primary: Box<dyn DocumentSource>, fallback: Option<Box<dyn DocumentSource>>) -> Self {
        Self { primary, fallback }
    }

    /// Fetches both documents concurrently and waits for both.
    /// Either one failing fails the whole load.
    pub fn load(&self, urls: &SourceUrls) -> Result<Documents, LoadError> {
        let start = Instant::now();

        let (registry, vacancy) = std::thread::scope(|s| {
            let registry = s.spawn(move || self.fetch_one(&urls.hotels, &urls.hotels_fallback));
            let vacancy = self.fetch_one(&urls.vacancy, &urls.vacancy_fallback);

            let registry = registry.join().unwrap_or_else(|_| {
                Err(LoadError::Network {
                    url: urls.hotels.clone(),
                    msg: "fetch thread panicked".into(),
                })
            });

            (registry, vacancy)
        });

        let docs = Documents {
            registry: registry?,
            vacancy: vacancy?,
        };

        info!("Loaded registry and vacancy documents in {:?}", start.elapsed());
        Ok(docs)
    }

    /// One primary attempt, then at most one fallback attempt.
    /// When both fail the primary error is the one reported.
    fn fetch_one(&self, location: &str, fallback_path: &str) -> Result<Value, LoadError> {
        let err = match self.primary.fetch_json(location) {
            Ok(doc) => return Ok(doc),
            Err(e) => e,
        };

        let Some(fallback) = &self.fallback else {
            return Err(err);
        };

        warn!("Fetching {location} failed ({err}), trying local {fallback_path}");

        fallback.fetch_json(fallback_path).map_err(|fallback_err| {
            warn!("Local fallback {fallback_path} failed too: {fallback_err}");
            err
        })
    }
}
