//! Blocking HTTP client over reqwest.
//!
//! Requests go out as HTTP/1.0 with redirects and decompression off, so the
//! body arrives as the server sent it. A response that still declares a
//! transfer or content encoding is refused rather than misread.
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_ENCODING, HeaderMap, TRANSFER_ENCODING};
use reqwest::redirect::Policy;
use reqwest::Version;

use crate::{Location, NetError};

const USER_AGENT: &str = concat!("leafview/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(10);

/// Source of document bodies.
pub trait Fetch {
    fn fetch(&self, location: &Location) -> Result<String, NetError>;
}

/// Fetches `http` and `https` documents; TLS trusts the platform's roots.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, NetError> {
        let client = Client::builder()
            .timeout(TIMEOUT)
            .user_agent(USER_AGENT)
            .redirect(Policy::none())
            .http1_only()
            .build()
            .map_err(|e| NetError::Transport(format!("client build error: {e}")))?;
        Ok(Self { client })
    }

    /// Sends `GET location` and reads the whole response.
    pub fn request(&self, location: &Location) -> Result<Response, NetError> {
        let resp = self
            .client
            .get(location.to_string())
            .version(Version::HTTP_10)
            .send()?;

        reject_encodings(resp.headers())?;
        let status = resp.status();
        let bytes = resp.bytes()?;

        Ok(Response {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, location: &Location) -> Result<String, NetError> {
        let start = Instant::now();
        let response = self.request(location)?;
        log::info!(
            target: "net",
            "{location} -> {} {} ({} bytes, {} ms)",
            response.status,
            response.reason,
            response.body.len(),
            start.elapsed().as_millis()
        );
        Ok(response.body)
    }
}

/// Status and decoded body of a finished request.
#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

fn reject_encodings(headers: &HeaderMap) -> Result<(), NetError> {
    for name in [TRANSFER_ENCODING, CONTENT_ENCODING] {
        if let Some(value) = headers.get(&name) {
            let value = String::from_utf8_lossy(value.as_bytes());
            return Err(NetError::Protocol(format!("unsupported {name}: {value}")));
        }
    }
    Ok(())
}
