//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with axum extractors and their responses checked for
//! status codes, bodies and the distinct not-found cases.

mod ar_model;
mod equipment;

use mxlab_test_utils::prelude::*;

use crate::util::TestContextExt;
