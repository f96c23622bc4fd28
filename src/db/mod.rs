use std::path::Path;

use anyhow::Context;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

pub mod opinion;

/// Handle to the opinion database, shared with handlers as request data.
#[derive(Clone, Debug)]
pub struct Store {
    conn: DatabaseConnection,
}

impl Store {
    /// Opens (creating if needed) the SQLite file at `path` and ensures the
    /// opinion table exists.
    pub async fn open(path: &Path) -> anyhow::Result<Self> {
        let is_new = !path.exists();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create database dir {}", parent.display()))?;
        }

        let url = format!("sqlite:{}?mode=rwc", path.display());
        let store = Self::connect(ConnectOptions::new(url)).await?;
        store.ensure_schema().await?;

        if is_new {
            info!("Create new tables.");
        }

        Ok(store)
    }

    pub async fn open_in_memory() -> anyhow::Result<Self> {
        // every pooled connection would get its own in-memory database
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1);

        let store = Self::connect(options).await?;
        store.ensure_schema().await?;

        Ok(store)
    }

    async fn connect(options: ConnectOptions) -> anyhow::Result<Self> {
        let conn = Database::connect(options)
            .await
            .context("connect to database")?;

        Ok(Self { conn })
    }

    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut stmt = schema.create_table_from_entity(opinion::Entity);
        stmt.if_not_exists();

        self.conn.execute(backend.build(&stmt)).await?;

        Ok(())
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    pub async fn close(self) -> anyhow::Result<()> {
        self.conn.close().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let store = Store::open_in_memory().await.unwrap();

        store.ensure_schema().await.unwrap();
        opinion::insert(store.conn(), "t", "c").await.unwrap();
        store.ensure_schema().await.unwrap();

        assert_eq!(opinion::list_recent(store.conn()).await.unwrap().len(), 1);
        store.close().await.unwrap();
    }
}
