//! `HttpGet` over the network, backed by a `ureq` agent.
//!
//! The agent is configured with `http_status_as_error(false)` so 4xx/5xx
//! responses come back as data and the API client, not the transport, decides
//! what an acceptable status is.

use std::fmt;

use tracing::{debug, warn};

use crate::http::{HttpGet, HttpResponse, TransportError};

/// Blocking network transport.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpGet for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self.agent.get(url).call().map_err(|e| {
            warn!(%url, error = %e, "GET failed");
            Box::new(e) as TransportError
        })?;

        let status = response.status().as_u16();
        debug!(%url, status, "GET completed");
        Ok(HttpResponse::new(status, response.into_body().into_reader()))
    }
}
