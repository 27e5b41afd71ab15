//! Aliment repository contract and SQLite implementation.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use aliment_core::error::{AppError, ErrorKind};
use aliment_core::result::AppResult;
use aliment_entity::Aliment;

/// Persistence contract for aliments.
///
/// Any relational or embedded store satisfying these six operations is
/// interchangeable without touching the HTTP layer.
#[async_trait]
pub trait AlimentRepository: Send + Sync {
    /// Return every persisted aliment, primary key ascending.
    async fn get_all(&self) -> AppResult<Vec<Aliment>>;

    /// Return the aliment with the given id, or `None` if absent.
    async fn get_by_id(&self, id: i64) -> AppResult<Option<Aliment>>;

    /// Persist a transient aliment, ignoring any pre-set id, and return
    /// the newly assigned id.
    async fn insert(&self, aliment: &Aliment) -> AppResult<i64>;

    /// Overwrite name/description/status of the row matching `aliment.id`.
    /// A nonexistent id yields a not-found error.
    async fn update(&self, aliment: &Aliment) -> AppResult<()>;

    /// Remove the aliment with the given id. Returns `true` if a row was
    /// deleted.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Whether an aliment with the given id is currently persisted.
    async fn exists(&self, id: i64) -> AppResult<bool>;
}

/// Repository backed by the shared SQLite connection.
#[derive(Debug, Clone)]
pub struct SqliteAlimentRepository {
    pool: SqlitePool,
}

impl SqliteAlimentRepository {
    /// Create a new aliment repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlimentRepository for SqliteAlimentRepository {
    async fn get_all(&self) -> AppResult<Vec<Aliment>> {
        sqlx::query_as::<_, Aliment>(
            "SELECT id, name, description, status FROM aliment ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list aliments", e))
    }

    async fn get_by_id(&self, id: i64) -> AppResult<Option<Aliment>> {
        sqlx::query_as::<_, Aliment>(
            "SELECT id, name, description, status FROM aliment WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find aliment by id", e)
        })
    }

    async fn insert(&self, aliment: &Aliment) -> AppResult<i64> {
        aliment.validate()?;

        // RETURNING makes id assignment atomic within the statement.
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO aliment (name, description, status) VALUES (?1, ?2, ?3) RETURNING id",
        )
        .bind(&aliment.name)
        .bind(&aliment.description)
        .bind(aliment.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert aliment", e))?;

        debug!(id, "Inserted aliment");
        Ok(id)
    }

    async fn update(&self, aliment: &Aliment) -> AppResult<()> {
        aliment.validate()?;

        let result =
            sqlx::query("UPDATE aliment SET name = ?1, description = ?2, status = ?3 WHERE id = ?4")
                .bind(&aliment.name)
                .bind(&aliment.description)
                .bind(aliment.status)
                .bind(aliment.id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update aliment", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Aliment {} not found",
                aliment.id
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM aliment WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete aliment", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, id: i64) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM aliment WHERE id = ?1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check aliment existence", e)
            })
    }
}
