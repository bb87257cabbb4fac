//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Key-value persistence and the typed gateway over it
//! - Data directory resolution
//! - Logging setup
//! - Error types

pub mod config;
pub mod error;
pub mod logging;
pub mod storage;
