//! Shared response envelope types for API handlers.
//!
//! Typed structs instead of ad-hoc `serde_json::json!` calls, so the
//! response shapes are checked at compile time.

use serde::Serialize;

use recipebox_db::models::recipe::Recipe;

/// `{ "message": ..., "recipe": ... }` envelope for create and update.
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub message: &'static str,
    pub recipe: Recipe,
}

/// `{ "recipes": [...] }` envelope for listing.
#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
}

/// Bare `{ "message": ... }` confirmation envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
