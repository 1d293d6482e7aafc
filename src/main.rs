use crate::config::AppConfig;
use crate::data::DatasetCache;
use crate::responses::html_error_response;
use crate::router::handle;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

mod config;
mod data;
mod domain;
mod errors;
mod query;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

static LISTINGS: DatasetCache = DatasetCache::new();

fn main() {
    // 1️⃣ Logging first, so config problems are visible
    FmtSubscriber::builder()
        .with_max_level(config::log_level())
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let config = AppConfig::from_env();

    // 2️⃣ Load the listings once; every request shares the same copy
    let dataset = match LISTINGS.get_or_load(&config.csv_path) {
        Ok(ds) => ds,
        Err(e) => {
            error!("Failed to load listings from {}: {e}", config.csv_path.display());
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    let addr = match config.bind_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Invalid bind address {}:{}: {e}", config.host, config.port);
            std::process::exit(1);
        }
    };
    info!("Starting server at http://{addr} with {} listings", dataset.len());

    let server = Server::bind(&addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests, passing the dataset into the closure
    let result = server.serve(move |req, _info| match handle(req, dataset) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
