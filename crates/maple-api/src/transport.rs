//! HTTP 전송 계층.
//!
//! 클라이언트는 [`HttpGet`] 트레이트에만 의존합니다. 기본 구현인
//! [`ReqwestTransport`]는 재시도 없이 한 번만 요청합니다.

use async_trait::async_trait;
use maple_core::ApiConfig;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::codes::{ApiErrorCode, ErrorEnvelope};
use crate::error::{ApiError, ApiResult};

/// API 키 헤더 이름.
pub const API_KEY_HEADER: &str = "x-nxopen-api-key";

/// `GET path?query` 한 번을 수행하고 JSON 본문을 돌려주는 전송 계층.
#[async_trait]
pub trait HttpGet: Send + Sync {
    /// `path`는 `/maplestory/v1/...` 형태의 절대 경로입니다.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Value>;
}

#[async_trait]
impl<T: HttpGet + ?Sized> HttpGet for Arc<T> {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Value> {
        (**self).get(path, query).await
    }
}

/// reqwest 기반 전송 계층.
pub struct ReqwestTransport {
    config: ApiConfig,
    client: Client,
}

impl ReqwestTransport {
    /// 설정으로 전송 계층 생성.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl HttpGet for ReqwestTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Value> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        debug!(path, ?query, "GET request");

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.config.api_key())
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!(path, error = %e, "Request failed");
                ApiError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&body) {
                let code = ApiErrorCode::from_code(&envelope.error.name);
                warn!(
                    path,
                    status = status.as_u16(),
                    code = %code,
                    message = %envelope.error.message,
                    "API error response"
                );
                return Err(ApiError::Upstream {
                    status: status.as_u16(),
                    code,
                    message: envelope.error.message,
                });
            }

            error!(path, status = status.as_u16(), body = %body, "HTTP error without error body");
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        debug!(path, bytes = body.len(), "Response received");

        serde_json::from_str(&body)
            .map_err(|e| ApiError::Parse(format!("Failed to parse {} response: {}", path, e)))
    }
}
