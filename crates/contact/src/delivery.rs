use async_trait::async_trait;
use serde::Serialize;

use crate::SubmissionPayload;

/// Parameters handed to the delivery backend for one submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeliveryRequest {
    pub to_email: String,
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl DeliveryRequest {
    pub fn new(destination: impl Into<String>, payload: &SubmissionPayload) -> Self {
        Self {
            to_email: destination.into(),
            from_name: payload.name.to_owned(),
            from_email: payload.email.to_owned(),
            message: payload.message.to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),

    #[error("delivery rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("invalid delivery configuration: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Sends a contact submission somewhere a human will read it.
///
/// Implementations resolve exactly once per call, either way.
#[async_trait]
pub trait DeliveryClient: Send + Sync {
    async fn deliver(&self, request: &DeliveryRequest) -> Result<(), DeliveryError>;
}
