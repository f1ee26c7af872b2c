//! # newsdesk-server
//!
//! Axum HTTP server for the newsdesk web application.
//!
//! - HTTP endpoints: post list and detail pages, creation form, about page,
//!   health check, metrics counters
//! - View rendering: plain functions taking named-field payloads and
//!   returning [`axum::response::Html`]
//! - Errors: storage faults surface as generic 500 responses; the two
//!   anticipated conditions (empty title, missing post) are recovered
//!   in-handler

#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod handlers;
pub mod logging;
pub mod server;
pub mod views;

pub use config::ServerConfig;
pub use errors::AppError;
pub use server::{AppState, router};
