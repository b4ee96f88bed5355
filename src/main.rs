use crate::config::Config;
use crate::loader::{DocumentSource, FileSource, HttpSource, Loader};
use crate::router::{handle, AppContext, Clock};
use astra::Server;
use tracing::{error, info};

mod config;
mod domain;
mod errors;
mod loader;
mod responses;
mod router;
mod state;
mod templates;


fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vacancy_calendar=info".into()),
        )
        .init();

    let config = Config::from_env();

    let http = match HttpSource::new() {
        Ok(source) => source,
        Err(e) => {
            error!("❌ HTTP client initialization failed: {e}");
            std::process::exit(1);
        }
    };

    let fallback: Option<Box<dyn DocumentSource>> = if config.fallback_local {
        Some(Box::new(FileSource::new(config.fallback_dir.clone())))
    } else {
        None
    };

    let addr = config.bind_addr;
    let max_workers = config.max_workers;

    let ctx = AppContext {
        loader: Loader::new(Box::new(http), fallback),
        config,
        clock: Clock::System,
    };

    info!(
        "Starting server at http://{addr} (months ahead: {}, local fallback: {})",
        ctx.config.months_ahead, ctx.config.fallback_local
    );

    let server = Server::bind(&addr).max_workers(max_workers);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
