mod config;
mod latency;
pub mod service;
pub mod storage;

use std::sync::OnceLock;

use tracing::info;
use tracing_subscriber::EnvFilter;
use types::{Result, err};

pub use crate::config::{Config, LatencyConfig};
pub use crate::latency::Latency;
pub use crate::service::Services;
use crate::storage::{Seed, Store};

static SERVICES: OnceLock<Services> = OnceLock::new();

/// Logs to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Another subscriber may already be installed by the dev server.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

/// Loads configuration, seeds the store and makes the services available to
/// the server functions. Later calls keep the first store.
pub fn init() -> Result<()> {
    if SERVICES.get().is_some() {
        return Ok(());
    }

    let config = Config::load()?;
    let seed = Seed::load(config.seed_dir.as_deref())?;

    info!(
        employees = seed.employees.len(),
        departments = seed.departments.len(),
        roles = seed.roles.len(),
        attendance = seed.attendance.len(),
        leave_requests = seed.leave_requests.len(),
        "Seeded store"
    );

    let store = Store::from_seed(seed)?;
    if !config.latency.enabled {
        info!("Simulated latency disabled");
    }

    SERVICES
        .set(Services::new(&store, Latency::from_config(&config.latency)))
        .map_err(|_| err!("services are already initialized"))
}

pub fn services() -> Result<&'static Services> {
    SERVICES
        .get()
        .ok_or_else(|| err!("services are not initialized"))
}
