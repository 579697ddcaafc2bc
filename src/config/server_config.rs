//! 서버 실행 설정 관리 모듈
//!
//! 서버 바인딩, JSON 본문 크기 제한, Rate Limiting, CORS 설정을 환경 변수에서 읽어옵니다.
//! 값이 없으면 기본값을, 해석할 수 없는 값이면 에러 로그를 남기고 기본값을 사용합니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use log::error;

/// 환경 변수를 읽어 파싱합니다. 없거나 파싱에 실패하면 기본값을 반환합니다.
fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T>(key: &str, raw: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    raw.trim().parse::<T>().unwrap_or_else(|e| {
        error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
        default
    })
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// 워커 스레드 수 (`WORKERS`, 기본값: 4)
    pub fn workers() -> usize {
        env_or("WORKERS", 4)
    }

    /// JSON 요청 본문의 최대 크기(바이트)
    ///
    /// - `JSON_PAYLOAD_LIMIT`: 기본값 65536
    pub fn json_payload_limit() -> usize {
        env_or("JSON_PAYLOAD_LIMIT", 65_536)
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// # Examples
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn load() -> Self {
        Self {
            per_second: env_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: env_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    /// 허용할 Origin 목록
    ///
    /// `CORS_ALLOWED_ORIGINS`에 쉼표로 구분하여 지정합니다.
    /// 설정되지 않으면 로컬 개발용 Origin들을 허용합니다.
    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => Self::parse_origins(&raw),
            Err(_) => Self::DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_falls_back_on_invalid_value() {
        assert_eq!(parse_or("PORT", "9090", 8080u16), 9090);
        assert_eq!(parse_or("PORT", " 9090 ", 8080u16), 9090);
        assert_eq!(parse_or("PORT", "not-a-port", 8080u16), 8080);
        assert_eq!(parse_or("PORT", "70000", 8080u16), 8080);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }

        if env::var("JSON_PAYLOAD_LIMIT").is_err() {
            assert_eq!(ServerConfig::json_payload_limit(), 65_536);
        }
    }

    #[test]
    fn test_rate_limit_defaults() {
        if env::var("RATE_LIMIT_PER_SECOND").is_err() && env::var("RATE_LIMIT_BURST_SIZE").is_err() {
            assert_eq!(
                RateLimitConfig::load(),
                RateLimitConfig {
                    per_second: 100,
                    burst_size: 200
                }
            );
        }
    }

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            CorsConfig::parse_origins("https://a.example, https://b.example ,,"),
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }
}
