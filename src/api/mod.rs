//! HTTP surface: routes, handlers and the JSON error contract.

mod error;
mod handlers;
mod routes;

pub use routes::router;
