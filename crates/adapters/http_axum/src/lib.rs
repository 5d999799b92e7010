//! # blindhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **relay endpoint** `GET /api/remote/{command}`, answering
//!   plain text and HTTP 200 for every relayed outcome
//! - Serve a **server-side-rendered remote** that works with **zero
//!   JavaScript**: one `<form>` per command posting back to the server
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (text, HTML or JSON errors)
//!
//! ## Dependency rule
//! Depends on `blindhub-app` (for port traits and services) and
//! `blindhub-domain` (for domain types used in response mapping). Never leaks
//! axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
