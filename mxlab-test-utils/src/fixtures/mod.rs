//! Test fixture modules for database row creation.
//!
//! - `ar_model` - model rows with mock or caller-provided JSON columns
//! - `equipment` - equipment tag rows

pub mod ar_model;
pub mod equipment;

/// Pure factory functions for in-memory database models
pub mod factory {
    pub use super::ar_model::factory::*;
}
