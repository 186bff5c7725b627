use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::{HttpError, HttpMethod, HttpRequest, HttpResponse};

pub fn get<Msg>(
    url: impl Into<String>,
    returns: impl Fn(Result<HttpResponse, HttpError>) -> Msg + Send + Sync + 'static,
) -> HttpRequest<Msg> {
    HttpRequest {
        method: HttpMethod::Get,
        url: url.into(),
        headers: Vec::new(),
        body: None,
        returns: Arc::new(returns),
    }
}

pub fn post<Msg>(
    url: impl Into<String>,
    body: impl Into<Vec<u8>>,
    returns: impl Fn(Result<HttpResponse, HttpError>) -> Msg + Send + Sync + 'static,
) -> HttpRequest<Msg> {
    HttpRequest {
        method: HttpMethod::Post,
        url: url.into(),
        headers: Vec::new(),
        body: Some(body.into()),
        returns: Arc::new(returns),
    }
}

/// GET with an Elm-style `expect`: require a 2xx status and decode the body
/// as JSON into `T` before handing the outcome to the callback.
pub fn get_json<T, Msg>(
    url: impl Into<String>,
    returns: impl Fn(Result<T, HttpError>) -> Msg + Send + Sync + 'static,
) -> HttpRequest<Msg>
where
    T: DeserializeOwned,
{
    get(url, move |result| returns(result.and_then(decode_json)))
}

fn decode_json<T: DeserializeOwned>(resp: HttpResponse) -> Result<T, HttpError> {
    if !(200..300).contains(&resp.status) {
        return Err(HttpError::BadStatus {
            status: resp.status,
        });
    }
    serde_json::from_slice(&resp.body).map_err(|err| HttpError::BadBody {
        message: err.to_string(),
    })
}
