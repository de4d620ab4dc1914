//! `db` crate — document persistence behind the [`DocumentStore`] trait.
//!
//! Provides a Postgres connection pool, typed row structs, repository
//! functions over the `documents` table, and two store implementations:
//! [`PgDocumentStore`] for production and [`MemoryDocumentStore`] for tests
//! and database-less runs.  No business logic lives here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;
pub mod store;
pub mod postgres;
pub mod memory;

pub use pool::{DbPool, PoolSettings};
pub use error::DbError;
pub use store::DocumentStore;
pub use postgres::PgDocumentStore;
pub use memory::MemoryDocumentStore;
