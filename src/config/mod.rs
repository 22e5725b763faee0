#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

/// Australia Post postcode search endpoint used when none is configured.
pub const DEFAULT_API_ENDPOINT: &str = "https://digitalapi.auspost.com.au/postcode/search.json";
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 300;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;
pub const MAX_CACHE_TTL_SECONDS: u64 = 86_400;
