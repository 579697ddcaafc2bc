//! # Application Error Handling System
//!
//! 요청 처리 중 발생하는 에러를 공통 실패 Envelope로 변환합니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여,
//! 핸들러가 `?`로 에러를 돌려주기만 하면 일관된 JSON 응답이 만들어집니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `Validation` | 400 Bad Request | 필드/구조체 검증 실패 |
//! | `MalformedPayload` | 400 Bad Request | JSON 파싱 실패, Content-Type 오류, 크기 초과 |
//!
//! ## 응답 예제
//!
//! ```json
//! {
//!   "result_code": "400",
//!   "result_message": "Bad Request",
//!   "error": {
//!     "error_message": [
//!       "password : {  } must not be blank",
//!       "age : { 150 } must be less than or equal to 100"
//!     ]
//!   }
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::warn;
use thiserror::Error;

use crate::core::validation::ValidationFailure;
use crate::domain::dto::envelope::{Envelope, ErrorDetail};

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 위반된 모든 필드가 선언 순서대로 담겨 있습니다.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationFailure),

    /// 요청 본문을 해석할 수 없음 (400 Bad Request)
    #[error("malformed request body: {0}")]
    MalformedPayload(String),
}

impl AppError {
    /// 클라이언트에게 전달할 실패 Envelope를 생성합니다.
    pub fn to_envelope(&self) -> Envelope<()> {
        match self {
            AppError::Validation(failure) => failure.to_envelope(),
            AppError::MalformedPayload(_) => Envelope::failure(
                self.status_code(),
                ErrorDetail::new(vec![self.to_string()]),
            ),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 응답을 만들기 전에 프레임워크가 보고한 원본 에러를 로그로 남깁니다.
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(failure) => {
                warn!("요청 검증 실패: {}", failure.source_message())
            }
            AppError::MalformedPayload(reason) => warn!("요청 본문 해석 실패: {}", reason),
        }

        HttpResponse::build(self.status_code()).json(self.to_envelope())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
