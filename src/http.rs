//! HTTP execution for the Speaker Recognition API.

use std::time::Duration;

use bytes::Bytes;
use reqwest::{
    Client as ReqwestClient, Response,
    header::{HeaderMap, HeaderValue},
    multipart,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    binding::{Endpoint, Payload},
    error::{Error, Operation, Result},
    types::{ErrorResponse, OperationLocation},
};

/// Header carrying the subscription key on every request.
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Header carrying the polling URL of a long-running operation.
const OPERATION_LOCATION_HEADER: &str = "Operation-Location";

/// HTTP client shared by both recognition services.
///
/// Holds the one transport + codec configuration: base URL, subscription
/// key injected as a default header, and a single JSON decode path.
pub(crate) struct HttpClient {
    client: ReqwestClient,
    base_url: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(base_url: String, subscription_key: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(subscription_key)
            .map_err(|e| Error::Config(format!("invalid subscription key: {e}")))?;
        headers.insert(SUBSCRIPTION_KEY_HEADER, key);

        let client = ReqwestClient::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Executes an endpoint and decodes the JSON response body.
    pub async fn json<R>(&self, endpoint: Endpoint) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = self.send(endpoint).await?;
        let body = response.bytes().await?;
        // A success payload that fails to decode is a codec fault
        // (Error::Json), never a remote error.
        Ok(serde_json::from_slice(&body)?)
    }

    /// Executes an endpoint that returns no meaningful body.
    pub async fn unit(&self, endpoint: Endpoint) -> Result<()> {
        self.send(endpoint).await?;
        Ok(())
    }

    /// Executes a long-running submission and reads `Operation-Location`.
    pub async fn location(&self, endpoint: Endpoint) -> Result<OperationLocation> {
        let operation = endpoint.operation;
        let response = self.send(endpoint).await?;

        match response
            .headers()
            .get(OPERATION_LOCATION_HEADER)
            .and_then(|v| v.to_str().ok())
        {
            Some(url) => Ok(OperationLocation::new(url)),
            None => Err(Error::remote(
                operation,
                "missing Operation-Location header",
            )),
        }
    }

    /// Builds and sends one request; non-2xx becomes the typed error.
    async fn send(&self, endpoint: Endpoint) -> Result<Response> {
        let operation = endpoint.operation;
        let url = endpoint.url(&self.base_url);
        let method = endpoint.method.clone();

        let mut request = self.client.request(endpoint.method, &url);
        request = match endpoint.payload {
            Payload::Empty => request,
            Payload::Json(body) => request.json(&body),
            Payload::Audio { part, source } => {
                let form = multipart::Form::new().part(part, source.into_part().await?);
                request.multipart(form)
            }
        };

        debug!(%method, %url, ?operation, "sending request");
        let response = request.send().await?;
        debug!(status = %response.status(), %url, "received response");

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(remote_error(operation, response).await)
        }
    }
}

/// Normalizes a non-success response into the operation's typed error.
///
/// If the body decodes as `{error:{code,message}}` with a non-empty
/// message, the error carries that message verbatim; otherwise it carries
/// the decimal status code. This path must never raise a secondary error.
async fn remote_error(operation: Operation, response: Response) -> Error {
    let status = response.status();
    let body = response.bytes().await.unwrap_or_else(|_| Bytes::new());

    let message = match serde_json::from_slice::<ErrorResponse>(&body) {
        Ok(err) if !err.error.message.is_empty() => err.error.message,
        _ => status.as_u16().to_string(),
    };

    Error::remote(operation, message)
}
