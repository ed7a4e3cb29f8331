//! HTTP API: the storefront's backend-for-frontend.
//!
//! Routes under `/api` validate parameters, call collaborators through
//! [`app::services::AppServices`], and return JSON documents.

pub mod app;
pub mod config;
pub mod middleware;
