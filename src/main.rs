use address_validator::app::{self, envelope::ValidateAddressResponse};
use address_validator::core::ConfigProvider;
use address_validator::utils::error::{AddressError, ErrorSeverity};
use address_validator::utils::{logger, validation::{self, Validate}};
use address_validator::{CliConfig, TomlConfig};
use clap::Parser;

const EXIT_VALID: i32 = 0;
const EXIT_INVALID: i32 = 1;
const EXIT_SERVICE_UNAVAILABLE: i32 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置（可選）
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(mut config) => {
                config.apply_overrides(cli.timeout_seconds, cli.cache_ttl_seconds);
                Some(config)
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path.display(), e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(exit_code(&e));
            }
        },
        None => None,
    };

    // 初始化日誌
    let level = file_config.as_ref().and_then(|c| c.log_level());
    let json_logs = cli.json_logs || file_config.as_ref().is_some_and(|c| c.json_logs());
    if json_logs {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::info!("Starting address-validator");
    tracing::debug!("CLI config: {:?}", cli);

    let settings: &dyn ConfigProvider = match &file_config {
        Some(config) => config,
        None => &cli,
    };

    // 驗證配置與輸入
    let input = cli.address_input();
    let checks = match &file_config {
        Some(config) => config.validate(),
        None => cli.validate(),
    }
    .and_then(|_| {
        if cli.search {
            validation::validate_suburb(&input.suburb)?;
            validation::validate_state(&input.state)
        } else {
            input.validate()
        }
    });

    if let Err(e) = checks {
        fail(&e);
    }

    let validator = match app::build_validator(settings) {
        Ok(validator) => validator,
        Err(e) => fail(&e),
    };

    if cli.search {
        let response =
            app::search_postcode_query(validator.lookup(), &input.suburb, &input.state).await;
        println!("{}", response.to_json()?);

        let code = if response.is_error() {
            EXIT_SERVICE_UNAVAILABLE
        } else {
            EXIT_VALID
        };
        std::process::exit(code);
    }

    let response = app::validate_address_query(&validator, &input).await;
    println!("{}", response.to_json()?);

    std::process::exit(response_exit_code(&response));
}

fn fail(e: &AddressError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e));
}

fn exit_code(e: &AddressError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => EXIT_SERVICE_UNAVAILABLE, // 可重試
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn response_exit_code(response: &ValidateAddressResponse) -> i32 {
    match response.validation() {
        Some(result) if result.is_valid => EXIT_VALID,
        Some(_) => EXIT_INVALID,
        None => EXIT_SERVICE_UNAVAILABLE,
    }
}
