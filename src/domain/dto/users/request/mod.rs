//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트가 보낸 JSON을 구조화된 Rust 타입으로 변환하고
//! `validator` 크레이트의 선언적 규칙으로 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **필드 검증**: 길이, 범위, 이메일, 패턴 등 필드별 규칙
//! 3. **구조체 검증**: 여러 필드에 걸친 규칙 (필드 검증이 모두 통과한 경우에만)
//!
//! 검증 실패는 [`crate::core::validation::ValidationFailure`]로 변환되어
//! HTTP 400 응답의 에러 목록이 됩니다.

pub mod register_user_request;

pub use register_user_request::RegisterUserRequest;
