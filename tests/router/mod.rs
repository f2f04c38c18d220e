//! Full-router tests driving requests through every layer with `oneshot`.

mod assets;
mod scan_flow;

use axum::Router;
use mxlab::server::router;
use mxlab_test_utils::prelude::*;

use crate::util::TestContextExt;

async fn app() -> Result<Router, TestError> {
    let test = TestBuilder::new().with_tables().build().await?;

    Ok(router::routes().with_state(test.into_app_state()))
}
