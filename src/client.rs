//! Speaker Recognition API client.

use std::{sync::Arc, time::Duration};

use crate::{
    error::{Error, Result},
    http::HttpClient,
    identification::IdentificationService,
    verification::VerificationService,
};

/// Default Speaker Recognition API base URL (West US region).
pub const DEFAULT_BASE_URL: &str = "https://westus.api.cognitive.microsoft.com/spid/v1.0";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Speaker Recognition API client.
///
/// The client is the composition root: it builds one shared transport
/// configuration (base URL, subscription key header, JSON codec) and hands
/// it to both recognition services. Construct it once and share it; the
/// services hold no per-call state and are safe to use concurrently.
///
/// # Example
///
/// ```rust,no_run
/// # async fn run() -> speakerrec::Result<()> {
/// use speakerrec::Client;
///
/// let client = Client::new("your-subscription-key")?;
///
/// let created = client.verification().create_profile("en-us").await?;
/// println!("profile: {}", created.profile_id);
/// # Ok(())
/// # }
/// ```
pub struct Client {
    http: Arc<HttpClient>,
}

impl Client {
    /// Creates a new client against the default regional endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the subscription key is empty.
    pub fn new(subscription_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(subscription_key).build()
    }

    /// Creates a new client builder for more configuration options.
    pub fn builder(subscription_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(subscription_key)
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Returns the speaker identification service (1:N).
    pub fn identification(&self) -> IdentificationService {
        IdentificationService::new(self.http.clone())
    }

    /// Returns the speaker verification service (1:1).
    pub fn verification(&self) -> VerificationService {
        VerificationService::new(self.http.clone())
    }
}

/// Builder for creating a Speaker Recognition API client.
pub struct ClientBuilder {
    subscription_key: String,
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Creates a new client builder.
    pub fn new(subscription_key: impl Into<String>) -> Self {
        Self {
            subscription_key: subscription_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom base URL (e.g. another regional endpoint).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<Client> {
        if self.subscription_key.is_empty() {
            return Err(Error::Config(
                "subscription_key must be non-empty".to_string(),
            ));
        }

        let http = HttpClient::new(self.base_url, &self.subscription_key, self.timeout)?;

        Ok(Client {
            http: Arc::new(http),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_subscription_key_rejected() {
        assert!(matches!(Client::new(""), Err(Error::Config(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = Client::builder("key")
            .base_url("https://eastus.api.cognitive.microsoft.com/spid/v1.0/")
            .build()
            .unwrap();
        assert_eq!(
            client.base_url(),
            "https://eastus.api.cognitive.microsoft.com/spid/v1.0"
        );
    }

    #[test]
    fn test_services_share_one_transport() {
        let client = Client::new("key").unwrap();
        let id = client.identification();
        let ver = client.verification();
        // Both services clone the same Arc'd transport.
        assert_eq!(Arc::strong_count(&client.http), 3);
        drop((id, ver));
        assert_eq!(Arc::strong_count(&client.http), 1);
    }
}
