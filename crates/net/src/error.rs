#[derive(Debug)]
pub enum NetError {
    /// The URL could not be split into scheme, host and path.
    InvalidUrl(String),
    /// Only `http` and `https` are fetched.
    UnsupportedScheme(String),
    /// The server could not be reached or did not answer in time.
    Transport(String),
    /// The server's response is malformed or uses an unsupported encoding.
    Protocol(String),
}

impl std::fmt::Display for NetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NetError::InvalidUrl(e) => write!(f, "invalid url: {e}"),
            NetError::UnsupportedScheme(s) => write!(f, "unsupported scheme: {s}"),
            NetError::Transport(e) => write!(f, "transport error: {e}"),
            NetError::Protocol(e) => write!(f, "protocol error: {e}"),
        }
    }
}

impl std::error::Error for NetError {}

impl From<reqwest::Error> for NetError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            NetError::Transport(e.to_string())
        } else {
            NetError::Protocol(e.to_string())
        }
    }
}
