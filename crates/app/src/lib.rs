//! # blindhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven port** adapters must implement:
//!   - `DeviceGateway` — deliver a command body to the remote blind controller
//! - Define the **driving use-case**:
//!   - `RelayService` — apply the relay policy, call the gateway, fold
//!     connection failures into a text outcome
//!
//! ## Dependency rule
//! Depends on `blindhub-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
