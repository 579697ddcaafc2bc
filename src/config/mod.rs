//! # Configuration Module
//!
//! 서비스 설정을 환경 변수 기반으로 중앙에서 관리합니다.
//! `.env` 파일은 `main`에서 `PROFILE`에 따라 로드됩니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//! export JSON_PAYLOAD_LIMIT="65536"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,https://app.example.com"
//! ```

pub mod server_config;

pub use server_config::*;
