//! Recipe model and DTOs.
//!
//! The wire shape uses camelCase (`sourceUrl`); the stored shape keeps
//! ingredients as a JSON text blob, converted at the row boundary in
//! [`crate::repositories::recipe_repo`].

use serde::{Deserialize, Serialize};
use recipebox_core::types::DbId;

/// A recipe as the rest of the system sees it: ingredients are an
/// ordered list of strings, never the serialized column value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: String,
    pub source_url: String,
}

/// DTO for creating or replacing a recipe. All fields are required;
/// `image` and `source_url` may be empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInput {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: String,
    pub source_url: String,
}
