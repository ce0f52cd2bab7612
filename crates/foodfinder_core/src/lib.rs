//! Core logic for the Food Finder restaurant guide.
//! The command loop, queries and flat-file store live here; the binary only
//! wires configuration and process exit.

pub mod config;
pub mod guide;
pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use config::{ConfigError, GuideConfig, DEFAULT_DATA_FILE};
pub use guide::command::{parse_command, Command};
pub use guide::session::{startup_notice, Flow, Guide};
pub use logging::{default_log_dir, default_log_level, init_logging, logging_status};
pub use model::restaurant::{coerce_price, Restaurant, RestaurantValidationError};
pub use query::list::SortOrder;
pub use service::guide_service::{AddRestaurantRequest, GuideService};
pub use store::{
    open_store, FileRestaurantStore, LoadReport, RestaurantStore, Startup, StoreError,
    StoreOrigin, StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
