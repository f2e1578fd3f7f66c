// src/lib.rs

pub mod client;
pub mod config;
pub mod editor;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod routes;
pub mod session;
pub mod state;
pub mod utils;

// Re-export specific items for convenience if needed
pub use client::ApiClient;
pub use error::AppError;
pub use state::AppState;
