//! Userboard API service.
//!
//! A greeting endpoint, a create/list endpoint pair for users and a health
//! check, served with axum over a pluggable [`store::UserStore`].

pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;
