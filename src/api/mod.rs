//! HTTP layer: request parsing, status code mapping, response shaping and
//! server lifecycle.

mod errors;
mod handler;
mod query;
mod server;

pub use errors::ServerError;
pub use handler::{lookup, method_not_allowed, number_lookup_handler, NumberLookupResponse};
pub use query::{NumberLookupRequest, QueryParam};
pub use server::{router, shutdown_signal, HttpServer, NUMBER_LOOKUP_ENDPOINT};
