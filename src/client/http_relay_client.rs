use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::Message;

use super::{RelayApi, RelayApiError, SubmitReply};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";

pub struct HttpRelayClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct SubmitMessageBody<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpRelayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RelayApi for HttpRelayClient {
    async fn fetch_history(&self) -> Result<Vec<Message>, RelayApiError> {
        let messages = self
            .client
            .get(format!("{}/history", self.base_url))
            .send()
            .await?
            .json::<Vec<Message>>()
            .await?;
        Ok(messages)
    }

    async fn submit_message(&self, text: &str) -> Result<SubmitReply, RelayApiError> {
        let response = self
            .client
            .post(format!("{}/message", self.base_url))
            .json(&SubmitMessageBody { text })
            .send()
            .await?;

        if response.status().is_success() {
            Ok(SubmitReply::Created(response.json::<Message>().await?))
        } else {
            let body = response.json::<ErrorBody>().await?;
            Ok(SubmitReply::Rejected { error: body.error })
        }
    }
}
