use sqlx::FromRow;

use super::Database;
use crate::dedup::EntryStore;
use crate::models::EntryUrl;
use crate::Result;

/// Repository for the entry operations the maintenance commands need
pub struct EntryRepository<'a> {
    db: &'a Database,
}

#[derive(FromRow)]
struct EntryUrlRow {
    id: i64,
    url: String,
}

impl From<EntryUrlRow> for EntryUrl {
    fn from(row: EntryUrlRow) -> Self {
        EntryUrl {
            id: row.id,
            url: row.url,
        }
    }
}

impl<'a> EntryRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Get id and URL of every entry owned by a user, oldest first
    pub async fn find_ids_and_urls_by_user(&self, user_id: i64) -> Result<Vec<EntryUrl>> {
        let rows: Vec<EntryUrlRow> = sqlx::query_as(
            r#"
            SELECT id, url
            FROM entries
            WHERE user_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.into_iter().map(EntryUrl::from).collect())
    }

    /// Delete one entry in its own transaction and commit it immediately.
    ///
    /// Returns false when no row matched the id.
    pub async fn delete_and_commit(&self, id: i64) -> Result<bool> {
        let mut tx = self.db.pool().begin().await?;

        let result = sqlx::query("DELETE FROM entries WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }

    /// Get the number of entries owned by a user
    pub async fn count_by_user(&self, user_id: i64) -> Result<u32> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM entries WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(self.db.pool())
            .await?;

        Ok(count.0 as u32)
    }

    #[cfg(test)]
    pub(crate) async fn create(&self, user_id: i64, url: &str) -> Result<i64> {
        let result = sqlx::query("INSERT INTO entries (user_id, url, created_at) VALUES (?, ?, ?)")
            .bind(user_id)
            .bind(url)
            .bind(chrono::Utc::now())
            .execute(self.db.pool())
            .await?;

        Ok(result.last_insert_rowid())
    }
}

#[async_trait::async_trait]
impl<'a> EntryStore for EntryRepository<'a> {
    async fn find_ids_and_urls(&self, user_id: i64) -> Result<Vec<EntryUrl>> {
        self.find_ids_and_urls_by_user(user_id).await
    }

    async fn delete_and_commit(&self, entry_id: i64) -> Result<bool> {
        EntryRepository::delete_and_commit(self, entry_id).await
    }
}
