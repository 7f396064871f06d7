//! Shortkeep - a small file-backed URL shortener
//!
//! Long URLs are mapped to random 8-character keys held in an in-memory
//! store, which is restored from a JSON file at startup and written back
//! on graceful shutdown.
//!
//! # Architecture
//! - `utils`: Short key generation and URL validation
//! - `storage`: In-memory key-value store and the JSON persistence codec
//! - `services`: Shorten / expand business logic
//! - `api`: HTTP handlers and middleware
//! - `interfaces`: Offline CLI commands on the storage file
//! - `config`: Layered configuration
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
