use crate::config::{DEFAULT_CACHE_TTL_SECONDS, MAX_CACHE_TTL_SECONDS, MAX_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::{AddressError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub upstream: UpstreamConfig,
    pub cache: Option<CacheConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub endpoint: String,
    pub auth_token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub enabled: bool,
    pub ttl_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AddressError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AddressError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${AUSTRALIA_POST_API_TOKEN})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AddressError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_url("upstream.endpoint", &self.upstream.endpoint)?;

        let token = validation::validate_required_field("upstream.auth_token", &self.upstream.auth_token)?;
        validation::validate_non_empty_string("upstream.auth_token", token)?;
        if token.starts_with("${") {
            return Err(AddressError::ConfigValidationError {
                field: "upstream.auth_token".to_string(),
                message: format!("environment variable {} is not set", token),
            });
        }

        if let Some(timeout) = self.upstream.timeout_seconds {
            validation::validate_range(
                "upstream.timeout_seconds",
                timeout,
                1,
                MAX_TIMEOUT_SECONDS,
            )?;
        }

        if let Some(ttl) = self.cache.as_ref().and_then(|c| c.ttl_seconds) {
            validation::validate_range("cache.ttl_seconds", ttl, 1, MAX_CACHE_TTL_SECONDS)?;
        }

        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(AddressError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Unsupported level. Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }

    /// 命令列參數覆蓋檔案設定
    pub fn apply_overrides(&mut self, timeout_seconds: Option<u64>, cache_ttl_seconds: Option<u64>) {
        if let Some(timeout) = timeout_seconds {
            self.upstream.timeout_seconds = Some(timeout);
        }
        if let Some(ttl) = cache_ttl_seconds {
            self.cache = Some(CacheConfig {
                enabled: true,
                ttl_seconds: Some(ttl),
            });
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn api_endpoint(&self) -> &str {
        &self.upstream.endpoint
    }

    fn auth_token(&self) -> &str {
        self.upstream.auth_token.as_deref().unwrap_or_default()
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.upstream.timeout_seconds.map(Duration::from_secs)
    }

    fn cache_ttl(&self) -> Option<Duration> {
        self.cache
            .as_ref()
            .filter(|c| c.enabled)
            .map(|c| Duration::from_secs(c.ttl_seconds.unwrap_or(DEFAULT_CACHE_TTL_SECONDS)))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
