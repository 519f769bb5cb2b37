//! tracing 기반 로깅 초기화.
//!
//! 필터는 전역 레벨 하나에 이 라이브러리의 두 크레이트(`maple_core`, `maple_api`)
//! 지시자를 덧붙여 만듭니다. 요청 추적을 켜면 두 크레이트만 `debug`로 올라가
//! 게이트 거부 사유(`Date before query window`)와 요청 경로/파라미터가 출력되고,
//! HTTP 스택(hyper, reqwest)은 `warn`으로 고정됩니다.
//!
//! `RUST_LOG`가 설정되어 있으면 위 규칙 대신 그대로 사용합니다.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// 이 라이브러리를 구성하는 크레이트의 tracing 대상 이름.
pub const CRATE_TARGETS: [&str; 2] = ["maple_core", "maple_api"];

/// 요청 추적 시 조용히 시킬 HTTP 스택.
const NOISY_CRATES: &str = ",hyper=warn,hyper_util=warn,reqwest=warn";

const ENV_LOG: &str = "MAPLESTORY_LOG";
const ENV_LOG_FORMAT: &str = "MAPLESTORY_LOG_FORMAT";
const ENV_TRACE_REQUESTS: &str = "MAPLESTORY_TRACE_REQUESTS";

/// 로그 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 색상이 포함된 여러 줄 형식
    #[default]
    Pretty,
    /// JSON 한 줄 형식
    Json,
    /// 간결한 한 줄 형식
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// 외부 크레이트까지 포함한 전역 레벨 (예: "warn")
    pub level: String,
    /// `maple_core`/`maple_api`에 적용할 레벨
    pub crate_level: String,
    /// 요청 추적 (두 크레이트를 `debug`로)
    pub trace_requests: bool,
    /// 출력 형식
    pub format: LogFormat,
    /// 대상(모듈 경로) 출력 여부
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            crate_level: "info".to_string(),
            trace_requests: false,
            format: LogFormat::Compact,
            with_target: true,
        }
    }
}

impl LogConfig {
    pub fn new(crate_level: impl Into<String>) -> Self {
        Self {
            crate_level: crate_level.into(),
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_trace_requests(mut self, enabled: bool) -> Self {
        self.trace_requests = enabled;
        self
    }

    /// `EnvFilter` 지시자 문자열.
    ///
    /// ```
    /// use maple_core::logging::LogConfig;
    ///
    /// assert_eq!(
    ///     LogConfig::default().directives(),
    ///     "warn,maple_core=info,maple_api=info"
    /// );
    /// ```
    pub fn directives(&self) -> String {
        let crate_level = if self.trace_requests {
            "debug"
        } else {
            self.crate_level.as_str()
        };

        let mut directives = self.level.clone();
        for target in CRATE_TARGETS {
            directives.push_str(&format!(",{}={}", target, crate_level));
        }
        if self.trace_requests {
            directives.push_str(NOISY_CRATES);
        }
        directives
    }

    /// `MAPLESTORY_LOG`(크레이트 레벨), `MAPLESTORY_LOG_FORMAT`,
    /// `MAPLESTORY_TRACE_REQUESTS` 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(ENV_LOG) {
            config.crate_level = level;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT).and_then(|s| s.parse().ok()) {
            config.format = format;
        }
        config.trace_requests = lookup(ENV_TRACE_REQUESTS)
            .is_some_and(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"));

        config
    }
}

/// 로깅을 초기화합니다. 이미 전역 subscriber가 있으면 에러를 반환합니다.
///
/// ```no_run
/// use maple_core::logging::{init_logging, LogConfig, LogFormat};
///
/// init_logging(LogConfig::new("debug").with_format(LogFormat::Json)).unwrap();
/// ```
pub fn init_logging(config: LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.directives())?,
    };

    let fmt = tracing_subscriber::fmt::layer().with_target(config.with_target);
    let fmt = match config.format {
        LogFormat::Pretty => fmt.pretty().boxed(),
        LogFormat::Json => fmt.json().boxed(),
        LogFormat::Compact => fmt.compact().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt)
        .try_init()?;

    tracing::info!(
        format = ?config.format,
        directives = %config.directives(),
        "Logging initialized"
    );

    Ok(())
}

/// 환경 변수 설정으로 로깅을 초기화합니다.
pub fn init_logging_from_env() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging(LogConfig::from_env())
}
