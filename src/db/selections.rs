use anyhow::Result;
use teloxide::types::ChatId;

use super::Database;
use crate::concept::{ParamField, RestaurantParams};

#[derive(sqlx::FromRow)]
struct Selection {
    field: String,
    value: String,
}

impl Database {
    /// Store one parameter choice for a chat, replacing any previous value.
    pub async fn set_selection(&self, chat_id: ChatId, field: ParamField, value: &str) -> Result<()> {
        tracing::debug!(chat_id = chat_id.0, field = field.key(), value, "Storing selection");
        sqlx::query(
            "INSERT INTO selections (chat_id, field, value) VALUES (?, ?, ?) \
             ON CONFLICT(chat_id, field) DO UPDATE SET value = excluded.value",
        )
        .bind(chat_id.0)
        .bind(field.key())
        .bind(value)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Load a chat's selections; unselected fields take their defaults.
    pub async fn load_params(&self, chat_id: ChatId) -> Result<RestaurantParams> {
        tracing::trace!(chat_id = chat_id.0, "Loading selections");
        let rows = sqlx::query_as::<_, Selection>(
            "SELECT field, value FROM selections WHERE chat_id = ?",
        )
        .bind(chat_id.0)
        .fetch_all(self.pool())
        .await?;
        Ok(RestaurantParams::from_pairs(
            rows.into_iter().map(|r| (r.field, r.value)),
        ))
    }

    pub async fn clear_selections(&self, chat_id: ChatId) -> Result<()> {
        tracing::debug!(chat_id = chat_id.0, "Clearing selections");
        sqlx::query("DELETE FROM selections WHERE chat_id = ?")
            .bind(chat_id.0)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
