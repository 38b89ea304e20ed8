//! Delivery through the EmailJS REST API

use std::time::Duration;

use async_trait::async_trait;
use frontier_contact::{DeliveryClient, DeliveryError, DeliveryRequest};
use serde::{Deserialize, Serialize};

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmailJsConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT.to_owned(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            private_key: None,
            timeout_secs: 10,
        }
    }
}

impl EmailJsConfig {
    /// Names of the identifiers still unset.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// True while any identifier still holds a `YOUR_...` placeholder.
    pub fn has_placeholders(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .any(|value| value.starts_with("YOUR_"))
    }
}

#[derive(Serialize)]
struct SendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a DeliveryRequest,
}

#[derive(Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        tracing::info!(
            endpoint = %config.endpoint,
            service_id = %config.service_id,
            template_id = %config.template_id,
            "EmailJS delivery initialized"
        );

        Ok(Self { http, config })
    }
}

#[async_trait]
impl DeliveryClient for EmailJsClient {
    async fn deliver(&self, request: &DeliveryRequest) -> Result<(), DeliveryError> {
        let missing = self.config.missing();
        if !missing.is_empty() {
            return Err(DeliveryError::Config(format!(
                "missing EmailJS {}",
                missing.join(", ")
            )));
        }

        let body = SendBody {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: request,
        };

        tracing::debug!(endpoint = %self.config.endpoint, "POST EmailJS send");

        let response = self
            .http
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|err| DeliveryError::Network(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %body, "EmailJS rejected the message");

        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
