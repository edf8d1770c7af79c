//! Blocking HTTP GET over libcurl's easy interface.
//!
//! One attempt per call. No timeout is set beyond libcurl's defaults; the
//! status code is returned to the caller instead of being checked here.

use crate::error::MapError;
use crate::request::redact_key;

/// Status and full body of a completed GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Body as text for logging and error reporting (lossy on invalid UTF-8).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs a GET and buffers the response body in memory.
/// Follows redirects. Runs on the current thread.
pub fn get(url: &str) -> Result<HttpResponse, MapError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.useragent(concat!("mapview/", env!("CARGO_PKG_VERSION")))?;

    tracing::debug!(url = %redact_key(url), "GET");
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(status, bytes = body.len(), "response received");
    Ok(HttpResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_lossy() {
        let r = HttpResponse {
            status: 500,
            body: vec![b'o', b'k', 0xff],
        };
        assert_eq!(r.text(), "ok\u{fffd}");
    }

    #[test]
    fn unsupported_scheme_is_transport_error() {
        let err = get("notascheme://example").unwrap_err();
        assert!(matches!(err, MapError::Transport(_)));
    }
}
