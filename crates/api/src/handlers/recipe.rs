//! Handlers for the recipe CRUD endpoints.
//!
//! Each handler validates input, calls the repository, and maps the
//! outcome (found / not found / store failure) to an HTTP response.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use recipebox_core::error::CoreError;
use recipebox_core::recipe::{validate_description, validate_instructions, validate_title};
use recipebox_core::types::DbId;
use recipebox_db::models::recipe::RecipeInput;
use recipebox_db::repositories::RecipeRepo;

use crate::error::{AppError, AppResult};
use crate::response::{MessageResponse, RecipeListResponse, RecipeResponse};
use crate::state::AppState;

fn validate_input(input: &RecipeInput) -> Result<(), AppError> {
    validate_title(&input.title)
        .and_then(|()| validate_description(&input.description))
        .and_then(|()| validate_instructions(&input.instructions))
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))
}

/// POST /recipes
///
/// Create a new recipe. Echoes the stored row, including the assigned id.
pub async fn create_recipe(
    State(state): State<AppState>,
    Json(input): Json<RecipeInput>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let recipe = RecipeRepo::create(&state.pool, &input).await?;

    tracing::info!(recipe_id = recipe.id, title = %recipe.title, "Recipe created");

    Ok((
        StatusCode::CREATED,
        Json(RecipeResponse {
            message: "Recipe created successfully",
            recipe,
        }),
    ))
}

/// GET /recipes
///
/// List all recipes. An empty store yields 404, not an empty list; this
/// is the documented surface contract.
pub async fn list_recipes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let recipes = RecipeRepo::list_all(&state.pool).await?;

    if recipes.is_empty() {
        return Err(AppError::NotFound("No recipes found".to_string()));
    }

    Ok(Json(RecipeListResponse { recipes }))
}

/// GET /recipes/{id}
///
/// Get a single recipe by id.
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let recipe = RecipeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id,
        }))?;

    Ok(Json(recipe))
}

/// PUT /recipes/{id}
///
/// Replace all fields of an existing recipe. The id never changes.
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RecipeInput>,
) -> AppResult<impl IntoResponse> {
    validate_input(&input)?;

    let recipe = RecipeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id,
        }))?;

    tracing::info!(recipe_id = id, "Recipe updated");

    Ok(Json(RecipeResponse {
        message: "Recipe updated successfully",
        recipe,
    }))
}

/// DELETE /recipes/{id}
///
/// Delete a recipe. Deletion is idempotent at the store layer; the 404
/// here comes from the existence check on the current request.
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RecipeRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Recipe",
            id,
        }));
    }

    tracing::info!(recipe_id = id, "Recipe deleted");

    Ok(Json(MessageResponse {
        message: "Recipe deleted successfully",
    }))
}
