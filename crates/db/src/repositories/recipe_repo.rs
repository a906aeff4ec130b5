//! Repository for the `recipes` table.
//!
//! Expected absence is `Option`/`bool`, never an error, so callers can
//! distinguish "not found" from an actual store failure. Ingredients are
//! serialized to a JSON text column on write and deserialized on read;
//! the serialized form stays inside this module.

use sqlx::sqlite::SqlitePool;
use sqlx::FromRow;

use recipebox_core::types::DbId;

use crate::models::recipe::{Recipe, RecipeInput};

const COLUMNS: &str = "id, title, description, ingredients, instructions, image, source_url";

/// Raw row shape: ingredients still in their serialized column form.
#[derive(Debug, FromRow)]
struct RecipeRow {
    id: DbId,
    title: String,
    description: String,
    ingredients: String,
    instructions: String,
    image: String,
    source_url: String,
}

impl TryFrom<RecipeRow> for Recipe {
    type Error = sqlx::Error;

    fn try_from(row: RecipeRow) -> Result<Self, Self::Error> {
        let ingredients =
            serde_json::from_str(&row.ingredients).map_err(|e| sqlx::Error::ColumnDecode {
                index: "ingredients".to_string(),
                source: Box::new(e),
            })?;

        Ok(Recipe {
            id: row.id,
            title: row.title,
            description: row.description,
            ingredients,
            instructions: row.instructions,
            image: row.image,
            source_url: row.source_url,
        })
    }
}

fn encode_ingredients(ingredients: &[String]) -> Result<String, sqlx::Error> {
    serde_json::to_string(ingredients).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

/// Provides CRUD operations for recipes.
pub struct RecipeRepo;

impl RecipeRepo {
    /// Insert a new recipe, returning the stored row with its assigned id.
    pub async fn create(pool: &SqlitePool, input: &RecipeInput) -> Result<Recipe, sqlx::Error> {
        let ingredients = encode_ingredients(&input.ingredients)?;

        let query = format!(
            "INSERT INTO recipes \
                (title, description, ingredients, instructions, image, source_url) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, RecipeRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&ingredients)
            .bind(&input.instructions)
            .bind(&input.image)
            .bind(&input.source_url)
            .fetch_one(pool)
            .await?;

        row.try_into()
    }

    /// List every stored recipe. An empty store yields an empty vec, not
    /// an error; the request layer decides what "empty" means.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes ORDER BY id ASC");
        let rows = sqlx::query_as::<_, RecipeRow>(&query)
            .fetch_all(pool)
            .await?;

        rows.into_iter().map(Recipe::try_from).collect()
    }

    /// Find a recipe by id. `None` is a normal outcome.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Recipe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM recipes WHERE id = ?1");
        let row = sqlx::query_as::<_, RecipeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        row.map(Recipe::try_from).transpose()
    }

    /// Replace all fields of an existing recipe. The id is never changed.
    /// Returns `None` when no row has the given id.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &RecipeInput,
    ) -> Result<Option<Recipe>, sqlx::Error> {
        let ingredients = encode_ingredients(&input.ingredients)?;

        let query = format!(
            "UPDATE recipes SET \
                title = ?2, \
                description = ?3, \
                ingredients = ?4, \
                instructions = ?5, \
                image = ?6, \
                source_url = ?7 \
             WHERE id = ?1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, RecipeRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&ingredients)
            .bind(&input.instructions)
            .bind(&input.image)
            .bind(&input.source_url)
            .fetch_optional(pool)
            .await?;

        row.map(Recipe::try_from).transpose()
    }

    /// Hard-delete a recipe by id. Returns `true` if a row was removed;
    /// deleting an absent id is not an error.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
