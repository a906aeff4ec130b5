//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod recipe_repo;

pub use recipe_repo::RecipeRepo;
