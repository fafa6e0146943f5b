use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::api::{ChannelListResponse, SearchListResponse, SearchQuery, Transport};
use crate::config::{api_base_url, request_timeout};
use crate::error::{Error, Result};

/// YouTube Data API v3 client keyed by a developer API key
pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    /// Build a client from the environment's base URL and timeout settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(request_timeout()?).build()?;
        Ok(Self::with_client(client, api_key, api_base_url()))
    }

    pub fn with_client(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// GET `{base_url}/{resource}` and parse the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, resource);
        tracing::debug!(%url, ?params, "Sending request");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(redact_url)?;

        let status = response.status();
        let body = response.text().await.map_err(redact_url)?;
        if !status.is_success() {
            return Err(Error::Api { status, body });
        }

        tracing::debug!(%body, "Response");
        Ok(serde_json::from_str(&body)?)
    }
}

/// reqwest errors print the request URL, which carries the API key
fn redact_url(error: reqwest::Error) -> Error {
    Error::Http(error.without_url())
}

#[async_trait]
impl Transport for YouTubeClient {
    async fn channels_by_username(&self, username: &str) -> Result<ChannelListResponse> {
        let params = [
            ("forUsername", username.to_string()),
            ("part", "id".to_string()),
        ];
        self.get_json("channels", &params).await
    }

    async fn search_videos(&self, query: &SearchQuery) -> Result<SearchListResponse> {
        self.get_json("search", &query.params()).await
    }
}
