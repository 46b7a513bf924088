//! HTTP handlers

pub mod auth;
pub mod crud;
pub mod health;
pub mod stats;

pub use health::health;
