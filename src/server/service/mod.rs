//! Service layer.
//!
//! Services hold the business rules of the backend: validating and encoding model trees,
//! checking uniqueness before creates and renames, resolving tags to full models, and
//! storing uploaded files. They coordinate repositories, the tree codec and the blob store,
//! and return wire DTOs to the controllers.

pub mod ar_model;
pub mod asset;
pub mod equipment;
