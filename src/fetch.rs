//! Remote document retrieval
//!
//! Blocking HTTP client construction for [`Graph::load_uri`]. TLS
//! certificate verification is enabled by default; callers may opt out for
//! graphs loaded from hosts with self-signed certificates. There is no
//! timeout or retry at this layer; callers needing either should build their
//! own [`reqwest::blocking::Client`].
//!
//! [`Graph::load_uri`]: crate::graph::Graph::load_uri

use thiserror::Error;

/// `Accept` header sent when fetching remote graphs: Turtle preferred,
/// JSON-LD as fallback.
pub const RDF_ACCEPT: &str = "text/turtle;q=1,application/ld+json;q=0.5";

/// Fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    /// Client construction or transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-200 response
    #[error("could not fetch graph from {uri} - HTTP {code}")]
    Status {
        /// Requested URI
        uri: String,
        /// HTTP status code
        code: u16,
    },
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Build a blocking HTTP client for graph retrieval.
///
/// `skip_verify` disables TLS certificate verification; it defaults to
/// `false` everywhere this crate constructs a client.
pub fn http_client(skip_verify: bool) -> FetchResult<reqwest::blocking::Client> {
    let client = reqwest::blocking::Client::builder()
        .danger_accept_invalid_certs(skip_verify)
        .build()?;
    Ok(client)
}

/// Strip the fragment part of a URI: documents are fetched whole, fragments
/// only name nodes within them.
pub fn defrag(uri: &str) -> &str {
    match uri.find('#') {
        Some(pos) => &uri[..pos],
        None => uri,
    }
}
