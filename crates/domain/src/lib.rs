//! # blindhub-domain
//!
//! Pure domain model for the blindhub remote.
//!
//! ## Responsibilities
//! - Define the **commands** understood by the blind controller (`up`, `down`, `stop`)
//! - Define the **relay outcome** handed back to callers, and its text form
//! - Define the **relay policy** deciding whether unknown commands are forwarded
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The remote gateway is expressed as a trait in the `app` crate (port).

pub mod command;
pub mod error;
pub mod relay;
