//! # Tickex Server
//!
//! Stateless verification endpoint for the Tickex demo.
//!
//! The server exposes three routes:
//!
//! - `POST /api/verify` - classify a scanned payload and return a
//!   status/message pair
//! - `GET /api/csrf` - issue a token for the double-submit CSRF check on
//!   the verify route
//! - `GET /health` - liveness probe
//!
//! There is no database, no authentication, and no persistence; the
//! verification rule itself lives in `tickex-core`.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use infra::config::{Config, ServerConfig};
pub use routes::create_app;
