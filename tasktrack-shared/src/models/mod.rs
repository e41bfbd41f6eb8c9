/// Database models
///
/// - `user`: identity records behind registration and login
/// - `task`: to-do items, each owned by exactly one user

pub mod task;
pub mod user;
