//! API 라우트 설정 모듈
//!
//! REST API 엔드포인트와 헬스체크 엔드포인트를 등록하고,
//! JSON 본문 해석 실패를 공통 실패 Envelope로 변환하는 설정을 적용합니다.
//!
//! # Routes
//!
//! - `POST /api/user` - 회원가입 요청 검증
//! - `GET /health` - 헬스체크
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::config::ServerConfig;
use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8080/api/user \
///   -H "Content-Type: application/json" \
///   -d '{"data":{"nickname":"gildong","password":"secret12","age":20}}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/user").service(handlers::users::register_user));
}

/// JSON 추출 설정
///
/// 본문 크기 제한을 적용하고, 파싱 실패를 [`AppError::MalformedPayload`]로 변환합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(ServerConfig::json_payload_limit())
        .error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
            AppError::MalformedPayload(err.to_string()).into()
        })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_registration_api",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
