use crate::config::{DEFAULT_API_ENDPOINT, MAX_CACHE_TTL_SECONDS, MAX_TIMEOUT_SECONDS};
use crate::core::{AddressInput, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Parser)]
#[command(name = "address-validator")]
#[command(about = "Validate an Australian postcode, suburb and state against the Australia Post locality API")]
pub struct CliConfig {
    #[arg(long, required_unless_present = "search", help = "Four digit postcode")]
    pub postcode: Option<String>,

    #[arg(long, help = "Suburb name, or the search text with --search")]
    pub suburb: String,

    #[arg(long, help = "State code (NSW, VIC, QLD, SA, WA, TAS, NT, ACT)")]
    pub state: String,

    /// List the localities matching --suburb in --state instead of validating a postcode
    #[arg(long, conflicts_with = "postcode")]
    pub search: bool,

    #[arg(long, env = "AUSTRALIA_POST_API_URL", default_value = DEFAULT_API_ENDPOINT)]
    pub api_url: String,

    #[arg(long, env = "AUSTRALIA_POST_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    #[arg(long, help = "Upstream request timeout")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Cache successful lookups for this many seconds")]
    pub cache_ttl_seconds: Option<u64>,

    /// Path to TOML configuration file; its upstream settings replace the flags above
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 表單層級的輸入：郊區名稱去除前後空白
    pub fn address_input(&self) -> AddressInput {
        AddressInput::new(
            self.postcode.as_deref().unwrap_or_default().trim(),
            self.suburb.trim(),
            self.state.trim(),
        )
    }
}

// 避免在日誌中輸出 token
impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("postcode", &self.postcode)
            .field("suburb", &self.suburb)
            .field("state", &self.state)
            .field("search", &self.search)
            .field("api_url", &self.api_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .field("cache_ttl_seconds", &self.cache_ttl_seconds)
            .field("config", &self.config)
            .field("verbose", &self.verbose)
            .field("json_logs", &self.json_logs)
            .finish()
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_url
    }

    fn auth_token(&self) -> &str {
        self.api_token.as_deref().unwrap_or_default()
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl_seconds.map(Duration::from_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_url", &self.api_url)?;

        let token = validation::validate_required_field("api_token", &self.api_token)?;
        validation::validate_non_empty_string("api_token", token)?;

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        if let Some(ttl) = self.cache_ttl_seconds {
            validation::validate_range("cache_ttl_seconds", ttl, 1, MAX_CACHE_TTL_SECONDS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AddressError;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["address-validator"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_address_arguments() {
        let config = parse(&[
            "--postcode", "2000",
            "--suburb", "  Sydney ",
            "--state", "NSW",
            "--api-url", "https://api.example.com/search.json",
            "--api-token", "secret",
            "--timeout-seconds", "5",
        ]);

        assert_eq!(config.address_input(), AddressInput::new("2000", "Sydney", "NSW"));
        assert_eq!(config.api_endpoint(), "https://api.example.com/search.json");
        assert_eq!(config.auth_token(), "secret");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.cache_ttl(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_token_fails_validation() {
        let mut config = parse(&[
            "--postcode", "2000",
            "--suburb", "Sydney",
            "--state", "NSW",
            "--api-token", "placeholder",
        ]);
        config.api_token = None;

        assert!(matches!(
            config.validate(),
            Err(AddressError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_out_of_range_timeout_fails_validation() {
        let config = parse(&[
            "--postcode", "2000",
            "--suburb", "Sydney",
            "--state", "NSW",
            "--api-token", "secret",
            "--timeout-seconds", "0",
        ]);

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = parse(&[
            "--postcode", "2000",
            "--suburb", "Sydney",
            "--state", "NSW",
            "--api-token", "super-secret",
        ]);

        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_address_arguments_are_required() {
        let result = CliConfig::try_parse_from(["address-validator", "--postcode", "2000"]);
        assert!(result.is_err());

        let result = CliConfig::try_parse_from([
            "address-validator", "--suburb", "Sydney", "--state", "NSW",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_search_mode_does_not_need_postcode() {
        let config = parse(&[
            "--search",
            "--suburb", " Broad ",
            "--state", "NSW",
            "--api-token", "secret",
        ]);

        assert!(config.search);
        assert_eq!(config.postcode, None);
        assert_eq!(config.address_input(), AddressInput::new("", "Broad", "NSW"));

        let result = CliConfig::try_parse_from([
            "address-validator", "--search", "--postcode", "2000",
            "--suburb", "Sydney", "--state", "NSW",
        ]);
        assert!(result.is_err());
    }
}
