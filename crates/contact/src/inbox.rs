use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};
use validator::Validate;

use crate::{MessageStatus, SubmissionPayload};

pub const DEFAULT_LIST_LIMIT: u32 = 100;
pub const RECENT_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: MessageStatus,
    pub timestamp: i64,
    pub updated_at: Option<i64>,
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: String,
    name: String,
    email: String,
    message: String,
    status: sqlx::types::Text<MessageStatus>,
    created_at: i64,
    updated_at: Option<i64>,
}

impl From<ContactRow> for ContactMessage {
    fn from(row: ContactRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            message: row.message,
            status: row.status.0,
            timestamp: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct InboxStats {
    pub total_messages: i64,
    pub new_messages: i64,
    pub recent_messages: i64,
}

/// Stored contact messages submitted through the JSON API.
#[derive(Clone)]
pub struct Inbox {
    pub(crate) read_db: SqlitePool,
    pub(crate) write_db: SqlitePool,
}

impl Inbox {
    pub fn new(read_db: SqlitePool, write_db: SqlitePool) -> Self {
        Self { read_db, write_db }
    }

    #[tracing::instrument(skip_all, fields(email = %payload.email))]
    pub async fn submit(&self, payload: SubmissionPayload) -> frontier_shared::Result<ContactMessage> {
        payload.validate()?;

        let message = ContactMessage {
            id: ulid::Ulid::new().to_string(),
            name: payload.name,
            email: payload.email,
            message: payload.message,
            status: MessageStatus::New,
            timestamp: frontier_shared::now(),
            updated_at: None,
        };

        let result = sqlx::query(
            r#"
            INSERT INTO contact_message (id, name, email, message, status, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&message.id)
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .bind(message.status.as_ref())
        .bind(message.timestamp)
        .execute(&self.write_db)
        .await?;

        if result.rows_affected() == 0 {
            frontier_shared::bail!("Failed to save contact message");
        }

        tracing::info!(id = %message.id, "Contact message stored");

        Ok(message)
    }

    /// Newest first.
    pub async fn list(&self, limit: u32) -> frontier_shared::Result<Vec<ContactMessage>> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, name, email, message, status, created_at, updated_at
            FROM contact_message
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.read_db)
        .await?;

        Ok(rows.into_iter().map(ContactMessage::from).collect())
    }

    pub async fn find(&self, id: &str) -> frontier_shared::Result<Option<ContactMessage>> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, name, email, message, status, created_at, updated_at
            FROM contact_message
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.read_db)
        .await?;

        Ok(row.map(ContactMessage::from))
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_status(&self, id: &str, status: MessageStatus) -> frontier_shared::Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE contact_message
            SET status = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(status.as_ref())
        .bind(frontier_shared::now())
        .bind(id)
        .execute(&self.write_db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(frontier_shared::Error::NotFound);
        }

        Ok(())
    }

    /// Counts as of `now`; "recent" covers the last [`RECENT_DAYS`] days.
    pub async fn stats(&self, now: i64) -> frontier_shared::Result<InboxStats> {
        let since = frontier_shared::days_before(now, RECENT_DAYS);

        let stats = sqlx::query_as::<_, InboxStats>(
            r#"
            SELECT
                COUNT(*) AS total_messages,
                COALESCE(SUM(CASE WHEN status = ? THEN 1 ELSE 0 END), 0) AS new_messages,
                COALESCE(SUM(CASE WHEN created_at >= ? THEN 1 ELSE 0 END), 0) AS recent_messages
            FROM contact_message
            "#,
        )
        .bind(MessageStatus::New.as_ref())
        .bind(since)
        .fetch_one(&self.read_db)
        .await?;

        Ok(stats)
    }
}
