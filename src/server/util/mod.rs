//! Utility functions for filenames and asset paths.

pub mod asset;
pub mod filename;
