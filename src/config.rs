use anyhow::Result;
use config::{Environment, File};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://www.magpiehq.com/developer-challenge/smartphones/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub output_path: String,
    pub user_agent: String,
    pub request_timeout_seconds: u64,
    pub fetch_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_path: "output.json".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_seconds: 25,
            fetch_attempts: 1,
        }
    }
}

impl Config {
    /// Built-in defaults, then an optional `catalog_scraper.{toml,json,yaml}`
    /// file, then `CATALOG_SCRAPER_*` environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Config::default();

        let settings = config::Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("output_path", defaults.output_path)?
            .set_default("user_agent", defaults.user_agent)?
            .set_default("request_timeout_seconds", defaults.request_timeout_seconds)?
            .set_default("fetch_attempts", defaults.fetch_attempts)?
            .add_source(File::with_name("catalog_scraper").required(false))
            .add_source(Environment::with_prefix("CATALOG_SCRAPER"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
