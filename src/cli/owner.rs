use async_trait::async_trait;
use frontier_bot::{Content, MessageSender, OwnerConfig, Quoted, SendError};
use serde_json::json;

/// Prints every outgoing chat message as one JSON line on stdout.
pub struct ConsoleSender;

#[async_trait]
impl MessageSender for ConsoleSender {
    async fn send(
        &self,
        to: &str,
        content: Content,
        quoted: Option<&Quoted>,
    ) -> Result<(), SendError> {
        let line = serde_json::to_string(&json!({
            "to": to,
            "content": content,
            "quoted": quoted,
        }))
        .map_err(|err| SendError::Unknown(err.into()))?;

        println!("{line}");

        Ok(())
    }
}

/// Runs the owner command for `from` against the console.
pub async fn owner_card(owner: &OwnerConfig, from: &str) -> anyhow::Result<()> {
    tracing::info!(
        pattern = frontier_bot::OWNER_COMMAND.pattern,
        react = frontier_bot::OWNER_COMMAND.react,
        "Running chat command"
    );

    let quoted = Quoted {
        id: ulid::Ulid::new().to_string(),
        from: from.to_owned(),
    };

    frontier_bot::owner(&ConsoleSender, owner, from, Some(&quoted)).await;

    Ok(())
}
