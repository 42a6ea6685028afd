//! Error types for epitrend.
//!
//! This module contains the error type and the Result alias.

mod epi_error;

pub use epi_error::{EpiError, Result};
