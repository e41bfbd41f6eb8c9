//! # TaskTrack API Server Library
//!
//! Core functionality for the TaskTrack API server.
//!
//! ## Modules
//!
//! - `app`: application state and router builder
//! - `config`: configuration management
//! - `cookies`: auth cookie construction
//! - `error`: error handling and HTTP response mapping
//! - `middleware`: auth gate and security headers
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod cookies;
pub mod error;
pub mod middleware;
pub mod routes;
