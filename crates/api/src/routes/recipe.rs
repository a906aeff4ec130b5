//! Route definitions for the recipe CRUD surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::recipe;
use crate::state::AppState;

/// Routes mounted at `/recipes`.
///
/// ```text
/// GET    /        -> list_recipes
/// POST   /        -> create_recipe
/// GET    /{id}    -> get_recipe
/// PUT    /{id}    -> update_recipe
/// DELETE /{id}    -> delete_recipe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipe::list_recipes).post(recipe::create_recipe))
        .route(
            "/{id}",
            get(recipe::get_recipe)
                .put(recipe::update_recipe)
                .delete(recipe::delete_recipe),
        )
}
