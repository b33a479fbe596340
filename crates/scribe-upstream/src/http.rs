use crate::error::UpstreamError;
use crate::Result;

/// What the resolver needs from an HTTP response: whether it was a
/// success and the raw body to decode.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub ok: bool,
    pub body: String,
}

/// GET-capable client seam. The production implementation is
/// [`ReqwestHttp`]; tests substitute call-recording mocks.
pub trait HttpGet {
    /// # Errors
    ///
    /// Returns [`UpstreamError::Transport`] when no response could be
    /// obtained at all. A response with a non-success status is NOT an
    /// error here; it comes back with `ok == false`.
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse>;
}

pub struct ReqwestHttp {
    client: reqwest::blocking::Client,
}

impl ReqwestHttp {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for ReqwestHttp {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpGet for ReqwestHttp {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|source| UpstreamError::Transport(Box::new(source)))?;

        let ok = response.status().is_success();
        let body = response
            .text()
            .map_err(|source| UpstreamError::Transport(Box::new(source)))?;

        Ok(HttpResponse { ok, body })
    }
}
