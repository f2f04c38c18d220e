//! SeaORM entities for the AR model store.

pub mod prelude;

pub mod ar_equipment;
pub mod ar_model;
