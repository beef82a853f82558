//! URL assembly and the fetch-validate-decode pipeline for the user API.
//!
//! # Design
//! `ApiClient` holds only its transport and carries no mutable state between
//! calls, so it is exactly as thread-safe as the `HttpGet` it wraps. Every
//! stage of `fetch_user` maps to one `ApiError` variant and the first failure
//! ends the call. The response body is owned by `fetch_user` and dropped on
//! every return path.

use std::io::Read;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::http::HttpGet;
use crate::types::{Endpoint, User};

/// Operations a caller needs from the user API. Implemented by `ApiClient`;
/// tests substitute their own.
pub trait UserApi {
    fn user_url(&self, scheme: &str, host: &str, path: &str) -> String;
    fn fetch_user(&self, url: &str) -> Result<User, ApiError>;
}

/// Client for the user API, generic over the transport it sends GETs through.
#[derive(Debug, Clone)]
pub struct ApiClient<H> {
    http: H,
}

impl<H: HttpGet> ApiClient<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn build_url(&self, scheme: &str, host: &str, path: &str) -> String {
        build_url(scheme, host, path)
    }

    pub fn fetch_user(&self, url: &str) -> Result<User, ApiError> {
        debug!(%url, "fetching user");
        let mut response = self.http.get(url).map_err(|e| {
            warn!(%url, error = %e, "request failed");
            ApiError::Transport(e)
        })?;

        check_status(response.status())?;

        let mut body = Vec::new();
        response
            .body_mut()
            .read_to_end(&mut body)
            .map_err(ApiError::BodyRead)?;
        debug!(%url, bytes = body.len(), "read response body");

        serde_json::from_slice(&body).map_err(ApiError::Decode)
    }
}

impl<H: HttpGet> UserApi for ApiClient<H> {
    fn user_url(&self, scheme: &str, host: &str, path: &str) -> String {
        self.build_url(scheme, host, path)
    }

    fn fetch_user(&self, url: &str) -> Result<User, ApiError> {
        ApiClient::fetch_user(self, url)
    }
}

/// Path bytes left as-is: unreserved characters plus the sub-delimiters,
/// `:`, `@` and `/`. Everything else, `?` and `#` included, is escaped.
const PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b'/')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'@');

/// Host bytes left as-is, including the brackets and `:` of `[::1]:8080`.
const HOST: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'[')
    .remove(b']')
    .remove(b'<')
    .remove(b'>')
    .remove(b'"');

/// Join URL components as `scheme://host/path`.
///
/// Never fails: malformed parts produce a malformed URL and the failure shows
/// up when it is fetched. Host and path are percent-encoded, so path text can
/// never turn into a query or fragment. A `/` is inserted between host and
/// path when the path lacks one, and `//` is only written when there is a
/// host or path to follow the scheme.
pub fn build_url(scheme: &str, host: &str, path: &str) -> String {
    let mut url = String::with_capacity(scheme.len() + host.len() + path.len() + 4);
    if !scheme.is_empty() {
        url.push_str(scheme);
        url.push(':');
    }
    if (!scheme.is_empty() || !host.is_empty()) && (!host.is_empty() || !path.is_empty()) {
        url.push_str("//");
        url.extend(utf8_percent_encode(host, HOST));
    }
    if !host.is_empty() && !path.is_empty() && !path.starts_with('/') {
        url.push('/');
    }
    // A relative path whose first segment has a colon would read as a scheme.
    if url.is_empty() && path.split('/').next().is_some_and(|segment| segment.contains(':')) {
        url.push_str("./");
    }
    url.extend(utf8_percent_encode(path, PATH));
    url
}

/// Fetch the user at the default endpoint.
///
/// Errors are logged rather than returned; the URL that was tried is always
/// handed back alongside whatever user could be fetched.
pub fn fetch_default_user(api: &impl UserApi) -> (String, Option<User>) {
    let endpoint = Endpoint::default();
    let url = api.user_url(&endpoint.scheme, &endpoint.host, &endpoint.path);
    match api.fetch_user(&url) {
        Ok(user) => (url, Some(user)),
        Err(e) => {
            warn!(%url, error = %e, "could not fetch default user");
            (url, None)
        }
    }
}

fn check_status(status: u16) -> Result<(), ApiError> {
    if status == 200 {
        return Ok(());
    }
    Err(ApiError::UnexpectedStatus { status })
}
