//! # Brawl Gateway
//!
//! A REST gateway that reshapes Brawl Stars statistics for a web frontend.
//!
//! ## Architecture
//!
//! - **tag**: Player/club tag normalization and validation
//! - **format**: Display-field decoration of upstream payloads
//! - **analytics**: Battle-log aggregation and player comparison
//! - **upstream**: Authenticated client for the game-statistics API
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod analytics;
pub mod api;
pub mod config;
pub mod format;
pub mod tag;
pub mod upstream;
