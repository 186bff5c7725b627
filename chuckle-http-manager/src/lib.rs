//! HTTP effect manager for chuckle.
//!
//! Requests mirror Elm-style `Http.get { url, expect }` ergonomics: the app
//! builds an [`HttpRequest`] carrying a `returns` callback, and the manager
//! performs the request on a spawned task and resumes the app by routing the
//! callback's message back to the event loop. One task and one outbound
//! request per effect; no retry, no timeout, no cancellation.

pub mod requests;

pub use requests::{get, get_json, post};

use std::sync::Arc;

use chuckle_core::Router;

#[derive(Clone, Debug)]
pub enum HttpMethod {
    Get,
    Post,
}

#[derive(Clone)]
pub struct HttpRequest<Msg> {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>, // None for GET
    pub returns: Arc<dyn Fn(Result<HttpResponse, HttpError>) -> Msg + Send + Sync>,
}

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Failure taxonomy for the outbound interface. Transport problems, bad
/// statuses, and undecodable bodies all surface through the same callback.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("network error: {message}")]
    Network { message: String },
    #[error("unexpected status {status}")]
    BadStatus { status: u16 },
    #[error("malformed response body: {message}")]
    BadBody { message: String },
}

impl<Msg: 'static> HttpRequest<Msg> {
    pub fn map<Msg2>(
        self,
        f: impl Fn(Msg) -> Msg2 + Send + Sync + Clone + 'static,
    ) -> HttpRequest<Msg2> {
        let f = Arc::new(f);
        let returns = self.returns;
        HttpRequest {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
            returns: Arc::new(move |r| f(returns(r))),
        }
    }
}

// `returns` is an opaque callback; keep it out of Debug output.
impl<Msg> std::fmt::Debug for HttpRequest<Msg> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("body", &self.body)
            .finish()
    }
}

// === Effect Manager ===

/// HTTP effect manager backed by a shared `reqwest` connection pool.
pub struct HttpManager {
    client: reqwest::Client,
}

impl HttpManager {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub fn on_effects<Msg: Send + 'static>(
        &self,
        router: &Router<Msg>,
        effects: Vec<HttpRequest<Msg>>,
    ) {
        for req in effects {
            let client = self.client.clone();
            let app_sender = router.app_sender();
            tokio::spawn(async move {
                let HttpRequest {
                    method,
                    url,
                    headers,
                    body,
                    returns,
                } = req;
                let result = perform(&client, method, &url, headers, body).await;
                let _ = app_sender.send(returns(result));
            });
        }
    }
}

impl Default for HttpManager {
    fn default() -> Self {
        Self::new()
    }
}

async fn perform(
    client: &reqwest::Client,
    method: HttpMethod,
    url: &str,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
) -> Result<HttpResponse, HttpError> {
    let mut builder = match method {
        HttpMethod::Get => client.get(url),
        HttpMethod::Post => client.post(url),
    };
    for (name, value) in &headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(bytes) = body {
        builder = builder.body(bytes);
    }

    let response = builder.send().await.map_err(network_error)?;
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response.bytes().await.map_err(network_error)?.to_vec();

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

fn network_error(err: reqwest::Error) -> HttpError {
    HttpError::Network {
        message: err.to_string(),
    }
}
