use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use frontier_bot::OwnerConfig;
use frontier_notification::{EMAILJS_ENDPOINT, EmailConfig, EmailJsConfig};
use serde::{Deserialize, Serialize};
use std::env;
use validator::ValidateEmail;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub owner: OwnerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Public contact channels shown on every page. `address` also receives
/// the contact form submissions.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ContactConfig {
    pub address: String,
    pub whatsapp: String,
    pub instagram: String,
    pub instagram_url: String,
    pub youtube: String,
    pub youtube_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            address: "sirfrontier3@gmail.com".to_owned(),
            whatsapp: "+263788521064".to_owned(),
            instagram: "@frontiear".to_owned(),
            instagram_url: "https://www.instagram.com/frontiear".to_owned(),
            youtube: "@frontier-tech-r2m".to_owned(),
            youtube_url: "https://youtube.com/@frontier-tech-r2m".to_owned(),
        }
    }
}

impl ContactConfig {
    /// `https://wa.me/<digits>` link for the WhatsApp number.
    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", frontier_bot::whatsapp_id(&self.whatsapp))
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryBackend {
    #[default]
    Emailjs,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DeliveryConfig {
    pub backend: DeliveryBackend,
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            backend: DeliveryBackend::default(),
            endpoint: EMAILJS_ENDPOINT.to_owned(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            private_key: None,
            timeout_secs: 10,
        }
    }
}

impl DeliveryConfig {
    pub fn emailjs(&self) -> EmailJsConfig {
        EmailJsConfig {
            endpoint: self.endpoint.to_owned(),
            service_id: self.service_id.to_owned(),
            template_id: self.template_id.to_owned(),
            public_key: self.public_key.to_owned(),
            private_key: self.private_key.to_owned().filter(|key| !key.is_empty()),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FRONTIER__DATABASE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:frontier.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FRONTIER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !self.contact.address.validate_email() {
            return Err(format!(
                "Contact address `{}` is not a valid email",
                self.contact.address
            ));
        }

        match self.delivery.backend {
            DeliveryBackend::Emailjs => {
                let missing = self.delivery.emailjs().missing();
                if !missing.is_empty() {
                    return Err(format!("Delivery is missing {}", missing.join(", ")));
                }
            }
            DeliveryBackend::Smtp => {
                if self.email.smtp_host.trim().is_empty() {
                    return Err("Email smtp_host is required for smtp delivery".to_string());
                }
                if !self.email.from_address.validate_email() {
                    return Err("Email from_address is not a valid email".to_string());
                }
            }
        }

        Ok(())
    }

    /// Settings that are valid but still hold a `YOUR_...` placeholder.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = vec![];

        if self.delivery.backend == DeliveryBackend::Emailjs
            && self.delivery.emailjs().has_placeholders()
        {
            warnings.push(
                "EmailJS identifiers are placeholders; contact submissions will fail".to_owned(),
            );
        }

        warnings
    }
}
