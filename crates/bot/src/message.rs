use async_trait::async_trait;
use serde::Serialize;

/// What a chat message carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Text {
        text: String,
    },
    Image {
        image: Media,
        caption: String,
        #[serde(rename = "contextInfo", skip_serializing_if = "Option::is_none")]
        context: Option<ContextInfo>,
    },
    Contacts {
        contacts: ContactList,
    },
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Media {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactList {
    pub display_name: String,
    pub contacts: Vec<ContactCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactCard {
    pub vcard: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextInfo {
    pub mentioned_jid: Vec<String>,
    pub forwarding_score: u32,
    pub is_forwarded: bool,
    pub forwarded_newsletter_message_info: NewsletterInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterInfo {
    pub newsletter_jid: String,
    pub newsletter_name: String,
    pub server_message_id: u32,
}

/// The incoming message a reply is threaded under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quoted {
    pub id: String,
    pub from: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("chat connection closed")]
    Closed,

    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

/// A chat connection able to post messages to a JID.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(
        &self,
        to: &str,
        content: Content,
        quoted: Option<&Quoted>,
    ) -> Result<(), SendError>;
}
