use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

use crate::Inbox;

pub const STATUS_CHECK_LIMIT: u32 = 1000;

/// Client heartbeat kept for older API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    #[sqlx(rename = "created_at")]
    pub timestamp: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewStatusCheck {
    pub client_name: String,
}

impl Inbox {
    pub async fn record_status_check(
        &self,
        input: NewStatusCheck,
    ) -> frontier_shared::Result<StatusCheck> {
        let check = StatusCheck {
            id: ulid::Ulid::new().to_string(),
            client_name: input.client_name,
            timestamp: frontier_shared::now(),
        };

        sqlx::query("INSERT INTO status_check (id, client_name, created_at) VALUES (?, ?, ?)")
            .bind(&check.id)
            .bind(&check.client_name)
            .bind(check.timestamp)
            .execute(&self.write_db)
            .await?;

        Ok(check)
    }

    /// Oldest first, capped at [`STATUS_CHECK_LIMIT`].
    pub async fn status_checks(&self) -> frontier_shared::Result<Vec<StatusCheck>> {
        let checks = sqlx::query_as::<_, StatusCheck>(
            r#"
            SELECT id, client_name, created_at
            FROM status_check
            ORDER BY created_at ASC, rowid ASC
            LIMIT ?
            "#,
        )
        .bind(i64::from(STATUS_CHECK_LIMIT))
        .fetch_all(&self.read_db)
        .await?;

        Ok(checks)
    }
}
