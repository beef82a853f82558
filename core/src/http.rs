//! The transport capability the API client performs its I/O through.
//!
//! # Design
//! `HttpGet` is the only thing `ApiClient` knows about the network: give it a
//! URL, get back a status code and an unread body, or a transport failure.
//! Interpreting the status is left to the caller. `FnTransport` turns a
//! closure into an `HttpGet`, so tests can script responses inline without a
//! server.

use std::fmt;
use std::io::{Cursor, Read};
use std::sync::Arc;

/// Why a request could not be completed (refused, DNS, broken connection, ...).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Something that can issue an HTTP GET.
pub trait HttpGet {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// In-memory transport that answers every GET by calling a closure.
#[derive(Clone)]
pub struct FnTransport<F>(pub F);

impl<F> HttpGet for FnTransport<F>
where
    F: Fn(&str) -> Result<HttpResponse, TransportError>,
{
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (self.0)(url)
    }
}

impl<F> fmt::Debug for FnTransport<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnTransport")
    }
}

impl<T: HttpGet + ?Sized> HttpGet for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

impl<T: HttpGet + ?Sized> HttpGet for Box<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

impl<T: HttpGet + ?Sized> HttpGet for Arc<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}

/// A response whose body has not been read yet.
///
/// The body is released when the response is dropped, whichever way the
/// caller leaves the scope that owns it.
pub struct HttpResponse {
    status: u16,
    body: Box<dyn Read>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Read + 'static) -> Self {
        Self {
            status,
            body: Box::new(body),
        }
    }

    /// A response backed by an in-memory body.
    pub fn from_bytes(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, Cursor::new(body.into()))
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body_mut(&mut self) -> &mut dyn Read {
        &mut *self.body
    }
}

impl fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
