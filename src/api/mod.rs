//! HTTP API.
//!
//! JSON endpoints live under `/api/`; every other path falls through to the
//! static front-end directory. `app_router()` returns a plain `Router` that
//! can be served by `start_server` or driven directly in tests.

pub mod endpoints;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::{api_router, app_router};
pub use server::{start_server, ApiServer, ServerSession};
pub use types::ApiContext;
