//! Repository for the `characters` table.

use lore_core::character::status_or_default;
use lore_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::character::{Character, CreateCharacter, UpdateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, title, description, race, occupation, status, notable_traits";

/// Provides CRUD operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    ///
    /// If `status` is `None`, defaults to `Alive`. Fails with a unique
    /// violation if `name` is already taken.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateCharacter,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name, title, description, race, occupation, status, notable_traits)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.race)
            .bind(&input.occupation)
            .bind(status_or_default(input.status.as_deref()))
            .bind(&input.notable_traits)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = ?1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List characters in insertion order (`id` ascending).
    ///
    /// `offset` and `limit` are passed through as-is; callers clamp them.
    pub async fn list(
        pool: &SqlitePool,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             ORDER BY id ASC
             LIMIT ?1 OFFSET ?2"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. Only fields present in `input` change.
    ///
    /// The read, merge and write run in one `BEGIN IMMEDIATE` transaction,
    /// so the write lock is taken (waiting out the busy timeout) before the
    /// read instead of being upgraded mid-transaction. Returns `None` if no
    /// row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

        let select = format!("SELECT {COLUMNS} FROM characters WHERE id = ?1");
        let Some(mut character) = sqlx::query_as::<_, Character>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if input.is_empty() {
            return Ok(Some(character));
        }

        input.apply_to(&mut character);

        let update = format!(
            "UPDATE characters SET
                name = ?2,
                title = ?3,
                description = ?4,
                race = ?5,
                occupation = ?6,
                status = ?7,
                notable_traits = ?8
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Character>(&update)
            .bind(id)
            .bind(&character.name)
            .bind(&character.title)
            .bind(&character.description)
            .bind(&character.race)
            .bind(&character.occupation)
            .bind(&character.status)
            .bind(&character.notable_traits)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Permanently delete a character by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of stored characters.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM characters")
            .fetch_one(pool)
            .await
    }
}
