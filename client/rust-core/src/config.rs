use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub gateway_url: String,
    pub gateway_api_key: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let config_builder = config::Config::builder()
            // Load base config from TOML file
            .add_source(
                config::File::with_name(&format!("config/{}", env)).required(false), // Allow missing config file, fallback to ENV
            )
            // Override with environment variables (prefix: APP_)
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let settings = config_builder.build()?;

        // Extract values with fallbacks to ENV or defaults
        let gateway_url = settings
            .get_string("gateway.url")
            .or_else(|_| env::var("GATEWAY_URL"))
            .unwrap_or_else(|_| "http://localhost:8090".to_string());

        let gateway_api_key = settings
            .get_string("gateway.api_key")
            .or_else(|_| env::var("GATEWAY_API_KEY"))
            .unwrap_or_else(|_| {
                if env == "prod" {
                    panic!("FATAL: GATEWAY_API_KEY must be set in production!");
                }
                eprintln!("WARNING: Using default gateway API key (dev mode only!)");
                "dev-anon-key".to_string()
            });

        let request_timeout_secs = settings
            .get_string("gateway.request_timeout_secs")
            .ok()
            .or_else(|| env::var("GATEWAY_REQUEST_TIMEOUT_SECS").ok())
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(10);

        Ok(Config {
            gateway_url,
            gateway_api_key,
            request_timeout_secs,
        })
    }
}
