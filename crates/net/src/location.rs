use url::{Position, Url};

use crate::NetError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn default_port(self) -> u16 {
        match self {
            Scheme::Http => 80,
            Scheme::Https => 443,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// Everything needed to issue a request: `scheme://host[:port]/path`.
///
/// IPv6 literal hosts keep their brackets, so `Display` yields a valid URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
    /// Request target: path plus query, always starting with `/`.
    pub path: String,
}

impl Location {
    pub fn parse(input: &str) -> Result<Self, NetError> {
        let url = Url::parse(input.trim()).map_err(|e| NetError::InvalidUrl(e.to_string()))?;

        let scheme = match url.scheme() {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            other => return Err(NetError::UnsupportedScheme(other.to_string())),
        };
        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| NetError::InvalidUrl(format!("missing host in {input}")))?
            .to_string();
        let port = url.port().unwrap_or_else(|| scheme.default_port());

        let path = &url[Position::BeforePath..Position::AfterQuery];
        let path = if path.is_empty() { "/" } else { path };

        Ok(Self {
            scheme,
            host,
            port,
            path: path.to_string(),
        })
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}://{}", self.scheme.as_str(), self.host)?;
        if self.port != self.scheme.default_port() {
            write!(f, ":{}", self.port)?;
        }
        f.write_str(&self.path)
    }
}
