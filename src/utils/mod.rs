//! Utilities
pub mod fmt;
pub mod iter;
pub mod stats;
