//! Synchronous client core for the user API.
//!
//! # Overview
//! Builds request URLs, performs one GET through an injected transport,
//! checks the status, reads the body and decodes it into a `User`. Each of
//! those stages fails with its own `ApiError` variant.
//!
//! # Design
//! - `HttpGet` is the only network seam. `UreqTransport` is the real one;
//!   `FnTransport` answers from a closure for tests.
//! - `ApiClient` holds only its transport and adds no state or locking.
//! - `Settings` is an explicit value rather than a process global.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{build_url, fetch_default_user, ApiClient, UserApi};
pub use config::Settings;
pub use error::{ApiError, ConfigError};
pub use http::{FnTransport, HttpGet, HttpResponse, TransportError};
pub use transport::UreqTransport;
pub use types::{Endpoint, User};
