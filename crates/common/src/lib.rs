//! Common types and utilities for the Central360 backend

pub mod config;
pub mod error;
pub mod models;
pub mod release;

pub use config::Config;
pub use error::{Error, Result};
