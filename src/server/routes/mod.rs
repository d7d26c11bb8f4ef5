//! Route modules
//!
//! - assistant_routes: the research report pipeline (invoke/batch/stream/schemas)

pub mod assistant_routes;

use axum::Router;

use super::ServerAppState;

/// Path the report pipeline is mounted under
pub const ASSISTANT_PATH: &str = "/assistant";

/// Mount the runnable routes of the report pipeline under `path`
pub fn add_routes(router: Router<ServerAppState>, path: &str) -> Router<ServerAppState> {
    router.nest(path, assistant_routes::runnable_routes())
}
