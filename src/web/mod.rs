//! Web server module
//!
//! Provides the HTTP API and the browser interface.

mod handlers;
mod routes;
mod state;
mod templates;
pub mod view;

pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
