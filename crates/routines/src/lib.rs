//! `routines` crate — the Routine entity and its request schema.
//!
//! Pure domain code: no HTTP, no persistence.  The `api` crate validates
//! inbound payloads with [`validate_routine`] and hands the normalized
//! [`Routine`] to a `db::DocumentStore`.

pub mod models;
pub mod error;
pub mod schema;

pub use models::{Routine, ROUTINES_COLLECTION, LIST_LIMIT};
pub use error::{FieldError, ValidationErrors};
pub use schema::validate_routine;

#[cfg(test)]
mod schema_tests;
