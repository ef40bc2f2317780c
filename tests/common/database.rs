//! Database test fixtures and utilities
//!
//! Postgres-backed tests are opt-in: they run only when DATABASE_URL is
//! set, so the rest of the suite works against the in-memory store
//! without any infrastructure.

#[cfg(feature = "ssr")]
use sqlx::PgPool;

/// Test database fixture
///
/// Connects to DATABASE_URL, runs migrations, and truncates the tasks
/// table between tests.
#[cfg(feature = "ssr")]
pub struct TestDatabase {
    pool: PgPool,
}

#[cfg(feature = "ssr")]
impl TestDatabase {
    /// Connect to the test database, or `None` when DATABASE_URL is unset
    pub async fn connect() -> Option<Self> {
        let database_url = std::env::var("DATABASE_URL").ok()?;

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to create test database pool");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Some(Self { pool })
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Remove all task rows while preserving the schema
    pub async fn cleanup(&self) -> Result<(), sqlx::Error> {
        sqlx::query("TRUNCATE TABLE tasks").execute(&self.pool).await?;
        Ok(())
    }
}
