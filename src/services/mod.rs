//! Service layer for business logic
//!
//! This module provides logic that is shared between the HTTP API and the
//! CLI.

mod link_service;

pub use link_service::*;
