//! Screener content HTTP adapter.

mod handlers;
mod routes;

pub use handlers::ScreenerHandlers;
pub use routes::screener_routes;
