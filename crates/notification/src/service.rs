//! Email notification service using lettre

use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    pub from_address: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "localhost".to_owned(),
            smtp_port: 1025,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: "noreply@frontier.localhost".to_owned(),
        }
    }
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        // Fail at startup rather than on the first submission.
        let _: Mailbox = config.from_address.parse()?;

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
        })
    }

    /// Sends a plain/html alternative message. `reply_to` lets the recipient
    /// answer the visitor directly.
    #[tracing::instrument(skip(self, html, plain), fields(to = %to, subject = %subject))]
    pub async fn send(
        &self,
        to: &str,
        reply_to: Option<Mailbox>,
        subject: &str,
        html: String,
        plain: String,
    ) -> anyhow::Result<()> {
        tracing::info!("Sending email");

        let mut builder = Message::builder()
            .from(self.from.parse()?)
            .to(to.parse()?)
            .subject(subject);

        if let Some(reply_to) = reply_to {
            builder = builder.reply_to(reply_to);
        }

        let message = builder.multipart(MultiPart::alternative_plain_html(plain, html))?;

        // SmtpTransport blocks on the socket.
        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}
