//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers and the database
//! model aliases and write records used by the repositories.

pub mod app;
pub mod db;
