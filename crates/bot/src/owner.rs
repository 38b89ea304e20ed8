use serde::Deserialize;

use crate::{
    ContactCard, ContactList, Content, ContextInfo, Media, MessageSender, NewsletterInfo, Quoted,
    user_jid, vcard,
};

/// How a chat command is announced and matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub pattern: &'static str,
    pub react: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
}

pub const OWNER_COMMAND: CommandInfo = CommandInfo {
    pattern: "owner",
    react: "✅",
    desc: "Get owner number",
    category: "main",
};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OwnerConfig {
    pub name: String,
    pub number: String,
    pub bot_name: String,
    pub version: String,
    pub image_url: String,
    pub newsletter_jid: String,
    pub newsletter_name: String,
    pub server_message_id: u32,
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            name: "Frontier".to_owned(),
            number: "+263788521064".to_owned(),
            bot_name: "DELTA-MD-V1".to_owned(),
            version: "1.0.5".to_owned(),
            image_url: "https://files.catbox.moe/0go0uy.jpg".to_owned(),
            newsletter_jid: "120363401408526266@newsletter".to_owned(),
            newsletter_name: "DELTA-MD-V1-SUPPORT".to_owned(),
            server_message_id: 143,
        }
    }
}

pub fn caption(owner: &OwnerConfig) -> String {
    format!(
        "╭──〔  {bot} 〕──╮\n\
         │  Owner Information:    \n\
         │  ╭───────────────╮\n\
         │  ┃ Name    : {name}\n\
         │  ┃ Number  : {number}\n\
         │  ┃ Version : {version}\n\
         │  ╰───────────────╯\n\
         ╰── ᴘᴏᴡᴇʀᴇᴅ ʙʏ Frontier───╯ ",
        bot = owner.bot_name,
        name = owner.name,
        number = owner.number,
        version = owner.version,
    )
}

fn context(owner: &OwnerConfig) -> ContextInfo {
    ContextInfo {
        mentioned_jid: vec![user_jid(&owner.number)],
        forwarding_score: 999,
        is_forwarded: true,
        forwarded_newsletter_message_info: NewsletterInfo {
            newsletter_jid: owner.newsletter_jid.to_owned(),
            newsletter_name: owner.newsletter_name.to_owned(),
            server_message_id: owner.server_message_id,
        },
    }
}

async fn send_owner_card(
    sender: &dyn MessageSender,
    owner: &OwnerConfig,
    from: &str,
    quoted: Option<&Quoted>,
) -> anyhow::Result<()> {
    if owner.number.trim().is_empty() {
        anyhow::bail!("owner number is not configured");
    }

    sender
        .send(
            from,
            Content::Contacts {
                contacts: ContactList {
                    display_name: owner.name.to_owned(),
                    contacts: vec![ContactCard {
                        vcard: vcard(&owner.name, &owner.number),
                    }],
                },
            },
            None,
        )
        .await?;

    sender
        .send(
            from,
            Content::Image {
                image: Media {
                    url: owner.image_url.to_owned(),
                },
                caption: caption(owner),
                context: Some(context(owner)),
            },
            quoted,
        )
        .await?;

    Ok(())
}

/// Replies to `from` with the owner's contact card and a captioned image.
///
/// Failures are logged and reported back to `from` as text.
#[tracing::instrument(skip(sender, owner, quoted))]
pub async fn owner(
    sender: &dyn MessageSender,
    owner: &OwnerConfig,
    from: &str,
    quoted: Option<&Quoted>,
) {
    let Err(err) = send_owner_card(sender, owner, from, quoted).await else {
        return;
    };

    tracing::error!(error = %err, "owner command failed");

    let reply = Content::text(format!("An error occurred: {err}"));
    if let Err(err) = sender.send(from, reply, quoted).await {
        tracing::error!(error = %err, "failed to report owner command error");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_shows_owner_details() {
        let caption = caption(&OwnerConfig::default());

        assert!(caption.starts_with("╭──〔  DELTA-MD-V1 〕──╮\n"));
        assert!(caption.contains("┃ Name    : Frontier\n"));
        assert!(caption.contains("┃ Number  : +263788521064\n"));
        assert!(caption.contains("┃ Version : 1.0.5\n"));
        assert!(caption.ends_with("ᴘᴏᴡᴇʀᴇᴅ ʙʏ Frontier───╯ "));
    }

    #[test]
    fn context_mentions_owner_and_newsletter() {
        let context = context(&OwnerConfig::default());

        assert_eq!(context.mentioned_jid, vec!["263788521064@s.whatsapp.net"]);
        assert_eq!(context.forwarding_score, 999);
        assert!(context.is_forwarded);
        assert_eq!(
            context.forwarded_newsletter_message_info.server_message_id,
            143
        );
    }
}
