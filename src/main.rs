use crate::config::{load_app_config, StoreConfig};
use crate::db::{init_db, Database};
use crate::responses::html_error_response;
use crate::router::{handle, App};
use crate::service::ListingService;
use crate::store::{ListingStore, RestListingStore, SqliteListingStore};
use astra::Server;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod service;
mod share;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Configuration and logging
    let config = match load_app_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::info!(?config, "starting listing service");

    // 2️⃣ Listing store
    let store = match open_store(&config.store) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "store initialization failed");
            std::process::exit(1);
        }
    };

    let app = App::new(ListingService::new(store), config.public_url.clone());

    // 3️⃣ Start the server
    tracing::info!(addr = %config.bind_addr, public_url = %config.public_url, "server listening");
    let server = Server::bind(config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(error = %err, "request failed");
            html_error_response(err)
        }
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
        std::process::exit(1);
    }

    tracing::info!("server shut down cleanly");
}

fn open_store(cfg: &StoreConfig) -> Result<Box<dyn ListingStore>, errors::StoreError> {
    match cfg {
        StoreConfig::Sqlite {
            db_path,
            schema_path,
        } => {
            let db = Database::new(db_path.clone());
            init_db(&db, schema_path)?;
            Ok(Box::new(SqliteListingStore::new(db)))
        }
        StoreConfig::Rest {
            base_url,
            api_key,
            timeout,
        } => {
            let store = RestListingStore::new(base_url, api_key.clone(), *timeout)?;
            tracing::info!(endpoint = %store.endpoint(), "using REST listing store");
            Ok(Box::new(store))
        }
    }
}
