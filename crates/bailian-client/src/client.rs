use bon::Builder;
use std::time::Duration;

use crate::error::{BailianRequestError, parse_error_response};
use crate::request::AppCompletionRequest;
use crate::response::AppCompletionResponse;
use crate::streaming::SseEventParser;

const DEFAULT_BASE_URL: &str = "https://dashscope.aliyuncs.com/api/v1";

/// DashScope Bailian application API client
#[derive(Debug, Clone, Builder)]
pub struct Bailian {
    /// API key for authentication
    #[builder(into)]
    api_key: String,

    /// Base URL for the API (allows for custom endpoints)
    #[builder(default = DEFAULT_BASE_URL.to_string(), into)]
    pub base_url: String,

    /// HTTP client for making requests
    #[builder(skip)]
    client: reqwest::Client,
}

impl Bailian {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(600))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        }
    }

    /// Create a new client from the DASHSCOPE_API_KEY environment variable
    pub fn from_env() -> Result<Self, BailianRequestError> {
        let api_key = std::env::var("DASHSCOPE_API_KEY")
            .map_err(|_| BailianRequestError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    fn completion_url(&self, app_id: &str) -> String {
        format!(
            "{}/apps/{}/completion",
            self.base_url.trim_end_matches('/'),
            app_id
        )
    }

    /// Run a completion against the given application and wait for the
    /// full response
    pub async fn completion(
        &self,
        app_id: &str,
        request: &AppCompletionRequest,
    ) -> Result<AppCompletionResponse, BailianRequestError> {
        let response = self
            .client
            .post(self.completion_url(app_id))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json::<AppCompletionResponse>().await?)
        } else {
            let status = response.status();
            let bytes = response.bytes().await?;
            Err(parse_error_response(status, bytes))
        }
    }

    /// Run a completion against the given application and stream cumulative
    /// partial responses as they arrive
    pub fn stream(
        &self,
        app_id: &str,
        request: &AppCompletionRequest,
    ) -> futures_util::stream::BoxStream<'static, Result<AppCompletionResponse, BailianRequestError>>
    {
        use async_stream::try_stream;

        let client = self.client.clone();
        let api_key = self.api_key.clone();
        let url = self.completion_url(app_id);
        let request = request.clone();

        Box::pin(try_stream! {
            let response = client
                .post(&url)
                .bearer_auth(&api_key)
                .header("Accept", "text/event-stream")
                .header("X-DashScope-SSE", "enable")
                .json(&request)
                .send()
                .await?;

            let status = response.status();

            if !status.is_success() {
                let bytes = response.bytes().await?;
                Err(parse_error_response(status, bytes))?;
            } else {
                let mut parser = SseEventParser::new(response);

                while let Some(event) = parser.next_event().await? {
                    yield event;
                }
            }
        })
    }
}
