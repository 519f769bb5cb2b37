//! Open API 접속 설정.
//!
//! 설정 파일(TOML 등)과 `MAPLESTORY__*` 환경 변수, 또는 `.env`의
//! `MAPLESTORY_API_KEY` 등에서 로드합니다.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// 기본 API 주소.
pub const DEFAULT_BASE_URL: &str = "https://open.api.nexon.com";

/// 기본 요청 타임아웃 (초).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_API_KEY: &str = "MAPLESTORY_API_KEY";
const ENV_BASE_URL: &str = "MAPLESTORY_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "MAPLESTORY_TIMEOUT_SECS";

/// Open API 설정.
#[derive(Debug)]
pub struct ApiConfig {
    /// API 키 (`x-nxopen-api-key` 헤더)
    pub api_key: SecretString,
    /// API 기본 URL
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

/// 설정 소스에서 읽은 값. 키는 곧바로 [`SecretString`]으로 옮깁니다.
#[derive(Deserialize)]
struct RawApiConfig {
    api_key: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

impl From<RawApiConfig> for ApiConfig {
    fn from(raw: RawApiConfig) -> Self {
        ApiConfig::new(raw.api_key)
            .with_base_url(raw.base_url)
            .with_timeout_secs(raw.timeout_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ApiConfig {
    /// 기본 주소와 타임아웃으로 설정 생성.
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key: String = api_key.into();
        Self {
            api_key: SecretString::new(api_key.into_boxed_str()),
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API 키 원문. 요청 헤더를 만들 때만 사용합니다.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// `MAPLESTORY__API_KEY`처럼 `__` 구분자를 쓰는 환경 변수가 파일 값을 덮어씁니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let builder = Self::builder()?.add_source(config::File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// TOML 문자열과 환경 변수에서 설정을 로드합니다.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let builder = Self::builder()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));
        Self::finish(builder)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS)?)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config = builder
            .add_source(
                config::Environment::with_prefix("MAPLESTORY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let raw: RawApiConfig = config.try_deserialize()?;
        Ok(raw.into())
    }

    /// `.env`와 환경 변수에서 설정을 생성합니다.
    ///
    /// `MAPLESTORY_API_KEY`는 필수이고 `MAPLESTORY_BASE_URL`,
    /// `MAPLESTORY_TIMEOUT_SECS`는 선택입니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        // .env가 없어도 무시
        let _ = dotenvy::dotenv();
        Self::from_process_env()
    }

    /// 지정한 dotenv 파일을 읽은 뒤 [`from_env`](Self::from_env)와 같은 규칙으로 생성합니다.
    ///
    /// 이미 설정된 환경 변수는 파일 값보다 우선합니다.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        dotenvy::from_path(path.as_ref())?;
        Self::from_process_env()
    }

    fn from_process_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| ConfigError::MissingVar(ENV_API_KEY))?;
        let mut config = Self::new(api_key);

        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            config = config.with_base_url(base_url);
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT_SECS) {
            let timeout_secs = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_TIMEOUT_SECS,
                value: raw.clone(),
            })?;
            config = config.with_timeout_secs(timeout_secs);
        }

        Ok(config)
    }
}
