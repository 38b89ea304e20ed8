use async_trait::async_trait;
use frontier_contact::{DeliveryClient, DeliveryError, DeliveryRequest};
use lettre::message::Mailbox;

use crate::{EmailService, template::Template};

pub const CONTACT_SUBJECT: &str = "New message from contact page";

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactHtmlTemplate<'a> {
    pub request: &'a DeliveryRequest,
}

#[derive(askama::Template)]
#[template(path = "contact.txt")]
pub struct ContactPlainTemplate<'a> {
    pub request: &'a DeliveryRequest,
}

#[async_trait]
impl DeliveryClient for EmailService {
    async fn deliver(&self, request: &DeliveryRequest) -> Result<(), DeliveryError> {
        let html = Template::to_string(ContactHtmlTemplate { request });
        let plain = Template::to_string(ContactPlainTemplate { request });

        let reply_to = format!("{} <{}>", request.from_name, request.from_email)
            .parse::<Mailbox>()
            .ok();

        self.send(&request.to_email, reply_to, CONTACT_SUBJECT, html, plain)
            .await
            .map_err(|err| DeliveryError::Transport(err.to_string()))
    }
}
