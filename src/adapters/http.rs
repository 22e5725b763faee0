use crate::core::{ConfigProvider, LocalityLookup, RawLocalitiesResponse};
use crate::utils::error::{AddressError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

// 錯誤訊息中保留的回應內容字元數
const BODY_EXCERPT_LEN: usize = 200;

/// Client for the Australia Post locality search API.
#[derive(Debug, Clone)]
pub struct LocalitiesApi {
    client: Client,
    endpoint: Url,
    auth_token: String,
}

impl LocalitiesApi {
    pub fn new(endpoint: &str, auth_token: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, auth_token, None)
    }

    pub fn with_timeout(
        endpoint: &str,
        auth_token: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| AddressError::InvalidConfigValueError {
            field: "api_endpoint".to_string(),
            value: endpoint.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
            auth_token: auth_token.into(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Self::with_timeout(
            config.api_endpoint(),
            config.auth_token(),
            config.request_timeout(),
        )
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LocalityLookup for LocalitiesApi {
    async fn fetch_localities(&self, suburb: &str, state: &str) -> Result<RawLocalitiesResponse> {
        tracing::debug!(
            "📡 Making locality request to: {} (q={}, state={})",
            self.endpoint,
            suburb,
            state
        );

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("q", suburb), ("state", state)])
            .bearer_auth(&self.auth_token)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("📡 Locality API response status: {}", status);

        let body = response.text().await?;

        if !status.is_success() {
            return Err(AddressError::UpstreamStatusError {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        if body.trim().is_empty() {
            return Err(AddressError::EmptyResponseError);
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((index, _)) => trimmed[..index].to_string(),
        None => trimmed.to_string(),
    }
}
