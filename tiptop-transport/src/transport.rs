//! reqwest-backed [`ContactTransport`]

use std::sync::LazyLock;

use async_trait::async_trait;
use reqwest::Client;
use tiptop_core::{AbortSignal, ContactTransport, FormFields, TransportError, TransportResponse};
use url::{ParseError, Url};

use crate::http_client::HttpUtils;

/// Shared client with default connection pooling.
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .unwrap_or_default()
});

/// Posts the contact form as JSON.
///
/// The request is dropped (closing its connection) as soon as the abort signal
/// fires, so the deadline of the submission protocol also bounds network
/// usage.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Option<Url>,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    /// Transport on the shared client.
    pub fn new() -> Self {
        Self::with_client(HTTP_CLIENT.clone())
    }

    /// Transport on a caller-configured client (proxies, custom TLS roots).
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: None,
        }
    }

    /// Resolve relative endpoints such as `/api/kontakt` against `base_url`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Absolute URL for `endpoint`.
    fn resolve(&self, endpoint: &str) -> Result<Url, TransportError> {
        match (Url::parse(endpoint), &self.base_url) {
            (Ok(url), _) => Ok(url),
            (Err(ParseError::RelativeUrlWithoutBase), Some(base)) => base
                .join(endpoint)
                .map_err(|e| TransportError::Network(format!("invalid endpoint '{endpoint}': {e}"))),
            (Err(ParseError::RelativeUrlWithoutBase), None) => Err(TransportError::Network(format!(
                "endpoint '{endpoint}' is relative and no base URL is configured"
            ))),
            (Err(e), _) => Err(TransportError::Network(format!(
                "invalid endpoint '{endpoint}': {e}"
            ))),
        }
    }
}

#[async_trait]
impl ContactTransport for HttpTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        fields: &FormFields,
        signal: AbortSignal,
    ) -> Result<TransportResponse, TransportError> {
        if signal.is_aborted() {
            return Err(TransportError::Cancelled);
        }

        let url = self.resolve(endpoint).inspect_err(|e| {
            log::error!("[transport] {e}");
        })?;
        let request = self
            .client
            .post(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(fields);

        tokio::select! {
            biased;

            () = signal.aborted() => {
                log::debug!("[transport] POST {url} aborted");
                Err(TransportError::Cancelled)
            }
            result = HttpUtils::execute_request(request, "POST", url.as_str()) => result,
        }
    }
}
