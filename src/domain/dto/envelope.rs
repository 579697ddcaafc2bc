//! # 공통 응답 Envelope
//!
//! 모든 엔드포인트가 주고받는 균일한 래퍼 구조를 정의합니다.
//! 요청 본문도 같은 구조(`{"data": {...}}`)로 들어오며,
//! 응답은 성공/실패 두 가지 생성자로만 만들어집니다.
//!
//! ## 성공 응답
//! ```json
//! {
//!   "result_code": "200",
//!   "result_message": "OK",
//!   "data": { "name": "홍길동", "age": 20 }
//! }
//! ```
//!
//! ## 실패 응답
//! ```json
//! {
//!   "result_code": "400",
//!   "result_message": "Bad Request",
//!   "error": {
//!     "error_message": ["age : { 150 } must be less than or equal to 100"]
//!   }
//! }
//! ```

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// 요청/응답 공통 래퍼
///
/// 필드는 모두 선택적이며 값이 없는 필드는 직렬화 시 생략됩니다.
/// 응답용 인스턴스는 [`Envelope::ok`] 또는 [`Envelope::failure`]로만 생성되므로
/// `data`와 `error`가 동시에 채워지는 일은 없습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    result_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<ErrorDetail>,
}

/// 실패 시 클라이언트에게 전달되는 에러 상세
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// 위반 항목별 메시지 (검증 순서 유지)
    pub error_message: Vec<String>,
}

impl ErrorDetail {
    pub fn new(error_message: Vec<String>) -> Self {
        Self { error_message }
    }
}

impl<T> Envelope<T> {
    /// `200 OK` 성공 Envelope를 생성합니다.
    pub fn ok(data: T) -> Self {
        Self {
            result_code: Some(StatusCode::OK.as_str().to_string()),
            result_message: Some(reason_phrase(StatusCode::OK)),
            data: Some(data),
            error: None,
        }
    }

    /// 주어진 상태 코드로 실패 Envelope를 생성합니다.
    ///
    /// `result_code`는 상태 코드의 숫자 문자열, `result_message`는 표준 reason phrase입니다.
    pub fn failure(status: StatusCode, error: ErrorDetail) -> Self {
        Self {
            result_code: Some(status.as_str().to_string()),
            result_message: Some(reason_phrase(status)),
            data: None,
            error: Some(error),
        }
    }

    pub fn result_code(&self) -> Option<&str> {
        self.result_code.as_deref()
    }

    pub fn result_message(&self) -> Option<&str> {
        self.result_message.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorDetail> {
        self.error.as_ref()
    }

    /// 요청 Envelope에서 payload를 꺼냅니다.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}
