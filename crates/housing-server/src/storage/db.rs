//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;

/// Path value that selects a private in-memory database
pub const IN_MEMORY: &str = ":memory:";

pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        if database_path == IN_MEMORY {
            return Self::in_memory().await;
        }

        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        Self::from_pool(pool).await
    }

    /// Fresh database that lives as long as this value. Every pooled
    /// connection would see its own empty database, so the pool is capped
    /// at one connection.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .context("Invalid in-memory database URL")?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self> {
        tracing::debug!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    pub fn pool(&self) -> Arc<SqlitePool> {
        self.pool.clone()
    }

    /// Wait for in-flight queries and close every connection
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database closed");
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // Users table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                name TEXT NOT NULL,
                role TEXT NOT NULL,
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Buildings table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS buildings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                type TEXT NOT NULL,
                location TEXT NOT NULL,
                units_count INTEGER NOT NULL DEFAULT 0 CHECK (units_count >= 0)
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Residents table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS residents (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                national_id TEXT UNIQUE,
                phone TEXT,
                unit_number TEXT,
                building_id INTEGER REFERENCES buildings(id) ON DELETE SET NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Parking table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS parking (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                parking_number TEXT UNIQUE NOT NULL,
                status TEXT NOT NULL DEFAULT 'available',
                resident_id INTEGER REFERENCES residents(id) ON DELETE SET NULL,
                building_id INTEGER REFERENCES buildings(id) ON DELETE SET NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Violations table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS violations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                resident_id INTEGER REFERENCES residents(id) ON DELETE SET NULL,
                violation_type TEXT NOT NULL,
                description TEXT,
                date DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                status TEXT NOT NULL DEFAULT 'open',
                amount REAL NOT NULL DEFAULT 0 CHECK (amount >= 0)
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Complaints table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS complaints (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                resident_id INTEGER REFERENCES residents(id) ON DELETE SET NULL,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                category TEXT,
                status TEXT NOT NULL DEFAULT 'pending',
                priority TEXT NOT NULL DEFAULT 'medium'
                    CHECK (priority IN ('low', 'medium', 'high')),
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Traffic accidents table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS traffic_accidents (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date DATETIME NOT NULL,
                location TEXT NOT NULL,
                reporter_name TEXT NOT NULL,
                reporter_phone TEXT NOT NULL,
                involved_parties TEXT,
                severity TEXT NOT NULL,
                description TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'investigating',
                created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Dashboard counters filter by status
        for statement in [
            "CREATE INDEX IF NOT EXISTS idx_violations_status ON violations(status)",
            "CREATE INDEX IF NOT EXISTS idx_complaints_status ON complaints(status)",
            "CREATE INDEX IF NOT EXISTS idx_traffic_accidents_date ON traffic_accidents(date)",
        ] {
            sqlx::query(statement).execute(pool).await?;
        }

        Ok(())
    }
}
