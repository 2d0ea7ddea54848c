//! Network Layer
//!
//! HTTP transport for the hunt. Decodes requests, drives the actors in
//! `hunt/` and encodes the fixed replies.

pub mod protocol;
pub mod handler;
pub mod server;

pub use protocol::{ApiResponse, ConfigureRequest, ErrorResponse};
pub use handler::HuntHandler;
pub use server::{ConfigError, HuntServer, ServerConfig, ServerError};
