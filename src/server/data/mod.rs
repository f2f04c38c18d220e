//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. Each one works on a
//! single table keyed by its unique column (model name, equipment tag) and returns raw
//! entity models; decoding and error mapping happen in the service layer.

pub mod ar_model;
pub mod equipment;
