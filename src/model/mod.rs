//! Wire types shared by the HTTP API and its clients.

pub mod api;
pub mod ar_model;
pub mod equipment;
pub mod upload;
