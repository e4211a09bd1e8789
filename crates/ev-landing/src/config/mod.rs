use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

const DEFAULT_WHATSAPP_NUMBER: &str = "6281100000000";

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the landing service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub leads: LeadConfig,
    pub contact: ContactConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let show_targets = env::var("APP_LOG_TARGETS")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let endpoint = match env::var("APP_LEAD_ENDPOINT") {
            Ok(value) if !value.trim().is_empty() => {
                let value = value.trim().to_string();
                if !(value.starts_with("https://") || value.starts_with("http://")) {
                    return Err(ConfigError::InvalidLeadEndpoint(value));
                }
                Some(value)
            }
            _ => None,
        };
        if endpoint.is_none() && environment == AppEnvironment::Production {
            return Err(ConfigError::MissingLeadEndpoint);
        }
        let timeout_secs = env::var("APP_LEAD_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidLeadTimeout)?;

        let whatsapp_number = env::var("APP_WHATSAPP_NUMBER")
            .unwrap_or_else(|_| DEFAULT_WHATSAPP_NUMBER.to_string());
        let trimmed = whatsapp_number.trim();
        if !trimmed.chars().any(|c| c.is_ascii_digit())
            || !trimmed.chars().all(|c| c.is_ascii_digit() || c == '+')
        {
            return Err(ConfigError::InvalidWhatsappNumber(whatsapp_number));
        }

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                show_targets,
            },
            leads: LeadConfig {
                endpoint,
                timeout: Duration::from_secs(timeout_secs),
            },
            contact: ContactConfig {
                whatsapp_number: whatsapp_number.trim().to_string(),
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub show_targets: bool,
}

/// Where captured leads are forwarded. `None` only logs them and is refused
/// in production.
#[derive(Debug, Clone)]
pub struct LeadConfig {
    pub endpoint: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub whatsapp_number: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidLeadEndpoint(String),
    MissingLeadEndpoint,
    InvalidLeadTimeout,
    InvalidWhatsappNumber(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidLeadEndpoint(value) => {
                write!(f, "APP_LEAD_ENDPOINT must be an http(s) URL, got '{}'", value)
            }
            ConfigError::MissingLeadEndpoint => {
                write!(f, "APP_LEAD_ENDPOINT is required when APP_ENV is production")
            }
            ConfigError::InvalidLeadTimeout => {
                write!(f, "APP_LEAD_TIMEOUT_SECS must be a whole number of seconds")
            }
            ConfigError::InvalidWhatsappNumber(value) => {
                write!(f, "APP_WHATSAPP_NUMBER must contain digits only, got '{}'", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
