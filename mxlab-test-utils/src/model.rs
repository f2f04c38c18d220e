//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main mxlab crate to keep tests consistent.

/// Type alias for the AR model database model.
pub type StoredArModel = entity::ar_model::Model;

/// Type alias for the AR equipment database model.
pub type EquipmentModel = entity::ar_equipment::Model;
