use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let yelp_api_key = lookup("YELP_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());

    let log_level = or_default("TABLESCOUT_LOG_LEVEL", "info");
    let search_timeout_secs = parse_u64("TABLESCOUT_SEARCH_TIMEOUT_SECS", "8")?;
    let reviews_timeout_secs = parse_u64("TABLESCOUT_REVIEWS_TIMEOUT_SECS", "5")?;
    let user_agent = or_default("TABLESCOUT_USER_AGENT", "tablescout/0.1 (venue-ranking)");

    Ok(AppConfig {
        yelp_api_key,
        log_level,
        search_timeout_secs,
        reviews_timeout_secs,
        user_agent,
    })
}
