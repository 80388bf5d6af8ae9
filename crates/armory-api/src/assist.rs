// Assistant endpoints: image-tag classification and text generation.

use reqwest::StatusCode;

use crate::client::ArmoryClient;
use crate::error::Error;
use crate::types::{ChatRequest, ChatResponse};

impl ArmoryClient {
    /// `GET /api/Imagga/classify?keyword={kw}` -- the raw body, untouched.
    pub async fn classify(&self, keyword: &str) -> Result<String, Error> {
        let resp = self
            .get_with_params("api/Imagga/classify", &[("keyword", keyword)])
            .await?;
        Self::text(resp, &[StatusCode::OK]).await
    }

    /// `POST /api/ChatGPT` -- the generated `response` text.
    pub async fn chat(&self, prompt: &str) -> Result<String, Error> {
        let resp = self
            .post_raw("api/ChatGPT", &ChatRequest { message: prompt })
            .await?;
        let reply: ChatResponse = Self::decode(resp, &[StatusCode::OK]).await?;
        Ok(reply.response)
    }
}
