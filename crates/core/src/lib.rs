//! Domain layer for the recipebox service.
//!
//! Holds the pieces shared by the persistence and request layers: the
//! `DbId` alias, the domain error type, and recipe field validation.
//! No I/O, no HTTP, no SQL lives here.

pub mod error;
pub mod recipe;
pub mod types;
