use std::sync::Arc;

use strum::{AsRefStr, Display};
use validator::ValidationErrors;

use crate::{ContactSession, DeliveryClient, DeliveryRequest};

pub const CONTACT_PATH: &str = "/contact";
pub const THANK_YOU_PATH: &str = "/thank-you";

pub const DELIVERY_FAILED_MESSAGE: &str =
    "There was an error sending your message. Please try again or contact us directly.";

#[derive(Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    #[default]
    Unset,
    Success,
    Error,
}

/// Result of one submit action.
#[derive(Debug)]
pub enum Submission {
    /// The backend accepted the message; the visitor moves on.
    Delivered,
    /// The backend failed; the payload is still in the session.
    Failed,
    /// Required fields missing or malformed; nothing was sent.
    Invalid(ValidationErrors),
    /// Another submit for the same session is still in flight.
    Ignored,
}

impl Submission {
    /// Where the visitor should be sent next, if anywhere.
    pub fn navigate_to(&self) -> Option<&'static str> {
        match self {
            Submission::Delivered => Some(THANK_YOU_PATH),
            _ => None,
        }
    }
}

/// Drives a [`ContactSession`] through one delivery attempt.
#[derive(Clone)]
pub struct ContactWorkflow {
    client: Arc<dyn DeliveryClient>,
    destination: String,
}

impl ContactWorkflow {
    pub fn new(client: Arc<dyn DeliveryClient>, destination: impl Into<String>) -> Self {
        Self {
            client,
            destination: destination.into(),
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    #[tracing::instrument(skip_all, fields(destination = %self.destination))]
    pub async fn submit(&self, session: &ContactSession) -> Submission {
        let payload = match session.begin() {
            Ok(payload) => payload,
            Err(submission) => return submission,
        };

        let request = DeliveryRequest::new(&self.destination, &payload);

        match self.client.deliver(&request).await {
            Ok(()) => {
                tracing::info!(from = %request.from_email, "Contact message delivered");
                session.resolve(Outcome::Success);

                Submission::Delivered
            }
            Err(err) => {
                tracing::error!(error = %err, from = %request.from_email, "Contact message delivery failed");
                session.resolve(Outcome::Error);

                Submission::Failed
            }
        }
    }
}
