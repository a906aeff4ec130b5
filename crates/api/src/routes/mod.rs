pub mod health;
pub mod recipe;
