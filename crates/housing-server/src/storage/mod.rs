//! Storage layer
//!
//! Uses SQLite (embedded) through an sqlx pool owned by [`Database`].

pub mod db;
pub mod seed;

pub use db::Database;
pub use seed::seed_default_users;
