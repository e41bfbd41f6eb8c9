/// API route handlers
///
/// Organized by resource:
///
/// - `health`: health check endpoint
/// - `users`: registration, login, logout, current user
/// - `tasks`: ownership-scoped task CRUD

pub mod health;
pub mod tasks;
pub mod users;
