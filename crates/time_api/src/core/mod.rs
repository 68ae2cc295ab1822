//! # Time API Core
//!
//! This module turns an instant into the snapshot served by `GET /api/time`.
//!
//! ## Features
//! - RFC 1123, UNIX seconds, universal sortable and universal full renderings
//! - Derived fields always rendered in UTC
//! - Pluggable clock for deterministic output
//!
//! ## Modules
//! - `clock`: The clock port and its system and fixed implementations
//! - `error`: Custom error types and their HTTP mapping
//! - `models`: Response entities
//! - `provider`: Reads the clock and builds snapshots
//! - `utils`: Format strings and timestamp helpers

pub mod clock;
pub mod error;
pub mod models;
pub mod provider;
pub mod utils;
