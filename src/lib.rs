pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{CachedLookup, LocalitiesApi};
pub use core::validator::AddressValidator;
pub use domain::model::{AddressInput, Locality, RawLocalitiesResponse, ValidationResult};
pub use domain::state::{state_label, AustralianState};
pub use utils::error::{AddressError, Result, ServiceError, ServiceErrorCode};
