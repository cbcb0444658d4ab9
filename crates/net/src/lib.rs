//! Document retrieval: URL splitting and a blocking HTTP client.

mod error;
mod http;
mod location;

pub use error::NetError;
pub use http::{Fetch, HttpFetcher, Response};
pub use location::{Location, Scheme};
