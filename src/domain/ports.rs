use crate::domain::model::HttpMethod;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn echo_json(&self) -> bool;
    fn request_timeout(&self) -> Duration;
}

/// Status and decoded body of one service response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<ApiResponse>;
}
