use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use dotenv::dotenv;
use std::{env, fmt, str::FromStr};

use crate::constants::LOCAL_DEV_ORIGIN;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AppEnvironment {
    Development,
    Production,
    Testing,
}

impl FromStr for AppEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(AppEnvironment::Development),
            "production" => Ok(AppEnvironment::Production),
            "testing" => Ok(AppEnvironment::Testing),
            _ => Err(ConfigError::Message(format!("Invalid environment: {}", s))),
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    #[serde(default = "default_env")]
    pub env: AppEnvironment,

    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_worker_count")]
    pub worker_count: usize,

    #[serde(default)]
    pub supabase_url: String,

    #[serde(default)]
    pub supabase_key: String,

    #[serde(default)]
    pub admin_email: String,

    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,

    #[serde(default = "default_storage_bucket")]
    pub storage_bucket: String,

    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_env() -> AppEnvironment {
    AppEnvironment::Development
}
fn default_name() -> String {
    "Portfolio Admin API".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_worker_count() -> usize {
    num_cpus::get()
}
fn default_frontend_url() -> String {
    LOCAL_DEV_ORIGIN.to_string()
}
fn default_storage_bucket() -> String {
    "cool-stuff".to_string()
}
fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        dotenv().ok();

        let raw_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let env_name = AppEnvironment::from_str(&raw_env)
            .map_err(|_| ConfigError::Message(format!("Invalid APP_ENV value: {}", raw_env)))?;

        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env_name)).required(false))
            .add_source(Environment::with_prefix("APP").try_parsing(true).ignore_empty(true));

        let mut config: Self = builder.build()?.try_deserialize()?;

        config.env = env_name;

        // Deployments predating the APP_ prefix export the bare names
        config.supabase_url = fill_or_env(config.supabase_url, &["APP_SUPABASE_URL", "SUPABASE_URL"])?;
        config.supabase_key = fill_or_env(config.supabase_key, &["APP_SUPABASE_KEY", "SUPABASE_KEY"])?;
        config.admin_email = fill_or_env(config.admin_email, &["APP_ADMIN_EMAIL", "ADMIN_EMAIL"])?;

        if let Ok(frontend_url) = env::var("FRONTEND_URL") {
            if env::var("APP_FRONTEND_URL").is_err() && !frontend_url.trim().is_empty() {
                config.frontend_url = frontend_url;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        match url::Url::parse(&self.supabase_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(_) => errors.push("SUPABASE_URL must use http or https"),
            Err(_) if self.supabase_url.trim().is_empty() => errors.push("SUPABASE_URL cannot be empty"),
            Err(_) => errors.push("SUPABASE_URL is not a valid URL"),
        }
        if self.supabase_key.trim().is_empty() {
            errors.push("SUPABASE_KEY cannot be empty");
        }
        if self.admin_email.trim().is_empty() {
            errors.push("ADMIN_EMAIL cannot be empty");
        }
        if self.storage_bucket.trim().is_empty() {
            errors.push("STORAGE_BUCKET cannot be empty");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Message(errors.join(", ")))
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == AppEnvironment::Production
    }

    /// Origins allowed by CORS: the configured frontend plus local development.
    pub fn cors_origins(&self) -> Vec<String> {
        let mut origins: Vec<String> = self.frontend_url
            .split(',')
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if !origins.iter().any(|o| o == LOCAL_DEV_ORIGIN) {
            origins.push(LOCAL_DEV_ORIGIN.to_string());
        }
        origins
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn fill_or_env(current: String, env_keys: &[&str]) -> Result<String, ConfigError> {
    if !current.trim().is_empty() {
        return Ok(current);
    }

    env_keys
        .iter()
        .find_map(|key| env::var(key).ok().filter(|v| !v.trim().is_empty()))
        .ok_or_else(|| ConfigError::Message(format!("{} must be set", env_keys.join(" or "))))
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Production => "production",
            AppEnvironment::Testing => "testing",
        };
        write!(f, "{s}")
    }
}

trait Redact {
    fn redact(&self) -> &str;
}

impl Redact for str {
    fn redact(&self) -> &str {
        if self.is_empty() {
            "[MISSING]"
        } else {
            "[REDACTED]"
        }
    }
}

impl Redact for String {
    fn redact(&self) -> &str {
        self.as_str().redact()
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("name", &self.name)
            .field("port", &self.port)
            .field("host", &self.host)
            .field("worker_count", &self.worker_count)
            .field("supabase_url", &self.supabase_url)
            .field("supabase_key", &self.supabase_key.redact())
            .field("admin_email", &self.admin_email)
            .field("frontend_url", &self.frontend_url)
            .field("storage_bucket", &self.storage_bucket)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}
