//! Slot store and session flag store.
//!
//! The slot store mirrors the frontend's localStorage layout: three
//! independent top-level documents, written back wholesale after every
//! mutation and read exactly once at load. The session store holds the
//! single "admin session active" marker.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;

/// Slot key for the persisted Theme document.
pub const THEME_SLOT: &str = "sogeting_theme";
/// Slot key for the persisted party list.
pub const PARTIES_SLOT: &str = "sogeting_parties";
/// Slot key for the persisted SiteInfo document.
pub const SITE_INFO_SLOT: &str = "sogeting_siteinfo";

/// Session key marking an active admin session.
pub const ADMIN_SESSION_KEY: &str = "is_admin_session";

/// Revision information for the persisted snapshot.
#[derive(Debug, Clone)]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub generated_at: String,
}

/// Durable key-value store for the three persisted slots.
#[derive(Clone)]
pub struct SlotStore {
    pool: SqlitePool,
}

impl SlotStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Read one slot's serialized document, if present.
    pub async fn read_slot(&self, key: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query("SELECT value FROM slots WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get("value")))
    }

    /// Write all three slots and bump the revision in a single transaction.
    ///
    /// A snapshot is either fully visible or not at all; there is no
    /// partial-write window across slots. Returns the new revision id.
    pub async fn save_all(
        &self,
        theme: &str,
        parties: &str,
        site_info: &str,
    ) -> Result<i64, AppError> {
        let now = Utc::now().to_rfc3339();
        let mut tx = self.pool.begin().await?;

        for (key, value) in [
            (THEME_SLOT, theme),
            (PARTIES_SLOT, parties),
            (SITE_INFO_SLOT, site_info),
        ] {
            sqlx::query(
                "INSERT INTO slots (key, value) VALUES (?, ?) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            )
            .bind(key)
            .bind(value)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("UPDATE meta SET revision_id = revision_id + 1, generated_at = ? WHERE id = 1")
            .bind(&now)
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query("SELECT revision_id FROM meta WHERE id = 1")
            .fetch_one(&mut *tx)
            .await?;
        let revision_id: i64 = row.get("revision_id");

        tx.commit().await?;
        Ok(revision_id)
    }

    /// Get revision info for the current snapshot.
    pub async fn revision_info(&self) -> Result<RevisionInfo, AppError> {
        let row = sqlx::query("SELECT revision_id, generated_at FROM meta WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(RevisionInfo {
            revision_id: row.get("revision_id"),
            generated_at: row.get("generated_at"),
        })
    }
}

/// Session-scoped flag store: one boolean-like marker, cleared on logout.
#[derive(Clone)]
pub struct SessionStore {
    pool: SqlitePool,
}

impl SessionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Mark the current session as an admin session.
    pub async fn mark_admin(&self) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO session (key, value) VALUES (?, 'true') \
             ON CONFLICT(key) DO UPDATE SET value = 'true'",
        )
        .bind(ADMIN_SESSION_KEY)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Whether an admin session flag from a previous sign-in is present.
    pub async fn is_admin_session(&self) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT value FROM session WHERE key = ?")
            .bind(ADMIN_SESSION_KEY)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row
            .map(|r| r.get::<String, _>("value") == "true")
            .unwrap_or(false))
    }

    /// Clear the admin session flag.
    pub async fn clear_admin(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM session WHERE key = ?")
            .bind(ADMIN_SESSION_KEY)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
