//! Epitrend Facade
//!
//! Unified re-exports for the epitrend analytics engine.
//!
//! This facade provides a single entry point to all epitrend functionality:
//! - Contracts, error type and data model from SPI
//! - `AnalysisOptions` and input parsing from API
//! - Algorithms and the series pipeline from Core

// Re-export everything from SPI
pub use epitrend_spi::*;

// Re-export everything from API
pub use epitrend_api::*;

// Re-export everything from Core
pub use epitrend_core::*;
