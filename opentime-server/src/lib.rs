//! HTTP surface for the open-time window registry.
//!
//! - `GET /health`
//! - `GET /api/v1/open-time`
//! - `GET /api/v1/open-time/:parameter`

mod error;
pub mod routes;
mod runtime;
pub mod settings;
mod state;

pub use error::{not_found_message, ApiError, ServerError, PARAMETER_NOT_FOUND};
pub use routes::build_router;
pub use runtime::{run, serve, start_blocking};
pub use settings::{LogFormat, ServerSettings, DEFAULT_PORT};
pub use state::AppState;
