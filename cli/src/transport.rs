//! Blocking HTTP transport backed by ureq.
//!
//! ureq's status-code-as-error behavior is disabled so 4xx/5xx responses come
//! back as data and `TodoClient` alone decides what a status means. Only
//! failures with no response at all become `ApiError::Transport`.

use todo_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};
use ureq::RequestBuilder;

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

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let headers = &req.headers;
        let path = req.path.as_str();
        let result = match (req.method, req.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(path), headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(path), headers).call(),
            (HttpMethod::Post, Some(body)) => with_headers(self.agent.post(path), headers).send(body.as_bytes()),
            (HttpMethod::Post, None) => with_headers(self.agent.post(path), headers).send_empty(),
            (HttpMethod::Put, Some(body)) => with_headers(self.agent.put(path), headers).send(body.as_bytes()),
            (HttpMethod::Put, None) => with_headers(self.agent.put(path), headers).send_empty(),
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
