//! # MD Cover Common Library
//!
//! Shared code for the MD Cover Creator services:
//! - Process configuration (listening port, static asset directory)
//! - Common error type

pub mod config;
pub mod error;

pub use error::{Error, Result};
