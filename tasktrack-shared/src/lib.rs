//! # TaskTrack Shared Library
//!
//! Shared types and business logic used by the TaskTrack API server.
//!
//! ## Module Organization
//!
//! - `models`: database models (`User`, `Task`)
//! - `auth`: password hashing, session tokens, and the auth context
//! - `db`: connection pool and migrations

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the TaskTrack shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
