//! Server application core modules.
//!
//! This module contains all server-side functionality for MXLab: HTTP routing, the model
//! tree codec and URL resolver, the model repository and equipment directory, blob
//! storage for uploaded assets, and startup wiring.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod storage;
pub mod tree;
pub mod util;
