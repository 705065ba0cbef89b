use std::any::type_name;

use gloo::net::http::{Request, RequestBuilder, Response};
use headers::{CacheControl, Header};
use http::{
    header::{self, ACCEPT, CACHE_CONTROL},
    StatusCode,
};
use mime::APPLICATION_JSON;
use serde::de::DeserializeOwned;
use tracing::debug;
use web_sys::RequestCredentials;

use crate::api::error::{FrontendError, ResultContext, WrongContentTypeError};

pub trait ResponseContentType: Sized {
    fn content_type(&self) -> Option<String>;
}

impl ResponseContentType for Response {
    fn content_type(&self) -> Option<String> {
        self.headers().get(header::CONTENT_TYPE.as_str())
    }
}

fn no_cache(builder: RequestBuilder) -> RequestBuilder {
    let cc = CacheControl::new().with_no_store();
    let mut headers = Vec::with_capacity(1);
    cc.encode(&mut headers);

    let value = headers.pop().expect("CacheControl::encode should be infallible...");
    let str = value.to_str().expect("CacheControl::encode valid str");

    builder.header(CACHE_CONTROL.as_str(), str)
}

fn is_json(content_type: Option<&String>) -> bool {
    // Accept parameters such as `; charset=utf-8`
    content_type.map_or(false, |v| {
        v.split(';').next().map(str::trim) == Some(APPLICATION_JSON.essence_str())
    })
}

/// Perform a json GET request
///
/// Sends the session cookies along. Non 2xx responses become
/// [FrontendError::Status] carrying the body text. No retries
pub async fn json_get<R>(url: &str) -> Result<R, FrontendError>
where
    R: DeserializeOwned,
{
    debug!("json_get({url}, response type: {})", type_name::<R>());

    let request = no_cache(Request::get(url))
        .header(ACCEPT.as_str(), APPLICATION_JSON.essence_str())
        .credentials(RequestCredentials::Include)
        .build()
        .map_err(FrontendError::from)
        .with_context(|| format!("Building request (for: GET {url})"))?;

    // Send the request and handle the network and js errors
    debug!("json_get::request::send");
    let response = request
        .send()
        .await
        .map_err(FrontendError::from)
        .with_context(|| format!("Sending GET {url}"))?;

    if !response.ok() {
        let code = StatusCode::from_u16(response.status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        // The body is informational only, don't fail over it
        let body = response.text().await.unwrap_or_default();
        debug!("json_get::return Err(Status({code}))");
        Err(FrontendError::Status { code, body }).with_context(|| format!("Response from GET {url}"))?;
    }

    // Check the content-type is what we're expecting
    let content_type = response.content_type();
    if !is_json(content_type.as_ref()) {
        let body = response
            .text()
            .await
            .map_err(FrontendError::from)
            .with_context(|| format!("Extracting response body as text from GET {url}"))?;

        debug!("json_get::return Err(WrongContentTypeError)");
        Err(WrongContentTypeError {
            expected: APPLICATION_JSON.to_string(),
            got: content_type,
            body,
        })
        .map_err(FrontendError::from)
        .with_context(|| format!("Response from GET {url}"))?;
    }

    debug!("json_get::deserialize");
    let payload = response
        .json::<R>()
        .await
        .map_err(FrontendError::from)
        .with_context(|| format!("Deserializing OK response ({}) from GET {url}", type_name::<R>()))?;

    debug!("json_get::return Ok::<{}>", type_name::<R>());
    Ok(payload)
}
