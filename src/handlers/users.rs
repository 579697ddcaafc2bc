//! # User Registration HTTP Handlers
//!
//! 회원가입 요청을 받아 검증하고, 검증을 통과한 payload를 그대로 되돌려줍니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/user` | 회원가입 요청 검증 및 echo | 200 OK / 400 Bad Request |
//!
//! 검증 실패는 [`AppError::Validation`]으로 전파되어 `ResponseError` 구현에서
//! 실패 Envelope로 변환되므로, 핸들러 본문에 도달했다는 것은 payload가 유효하다는 뜻입니다.

use actix_web::{post, web, HttpResponse};
use log::info;

use crate::core::errors::{AppError, AppResult};
use crate::core::validation::{OrderedValidate, ValidationFailure};
use crate::domain::dto::envelope::Envelope;
use crate::domain::dto::users::request::RegisterUserRequest;

/// 회원가입 핸들러
///
/// # 엔드포인트
///
/// `POST /api/user`
///
/// # 요청 본문
///
/// ```json
/// {
///   "data": {
///     "name": "홍길동",
///     "password": "secret12",
///     "age": 20,
///     "email": "hong@example.com"
///   }
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "result_code": "200",
///   "result_message": "OK",
///   "data": {
///     "name": "홍길동",
///     "password": "secret12",
///     "age": 20,
///     "email": "hong@example.com"
///   }
/// }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "result_code": "400",
///   "result_message": "Bad Request",
///   "error": {
///     "error_message": ["age : { 150 } must be less than or equal to 100"]
///   }
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/user \
///   -H "Content-Type: application/json" \
///   -d '{"data":{"name":"홍길동","password":"secret12","age":20}}'
/// ```
#[post("")]
pub async fn register_user(
    payload: web::Json<Envelope<RegisterUserRequest>>,
) -> AppResult<HttpResponse> {
    info!("회원가입 요청: {:?}", payload);

    let request = payload
        .into_inner()
        .into_data()
        .ok_or_else(ValidationFailure::missing_payload)?;

    // 유효성 검사
    request.validate_ordered().map_err(AppError::Validation)?;

    Ok(HttpResponse::Ok().json(Envelope::ok(request)))
}
