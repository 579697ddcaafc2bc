//! # Core Module
//!
//! 요청 검증 결과를 클라이언트 응답으로 바꾸는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`validation`] - 검증 실패 변환기
//! - **ValidationFailure**: 순서가 보장된 위반 목록
//! - **FieldOrder / OrderedValidate**: DTO 필드 선언 순서에 따른 정렬
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 실패 Envelope 생성
//!
//! ## 처리 흐름
//!
//! ```text
//! validator::ValidationErrors
//!          │  ValidationFailure::from_errors::<T>()
//!          ▼
//! ValidationFailure (field 순서 정렬)
//!          │  AppError::Validation
//!          ▼
//! HTTP 400 + Envelope { result_code, result_message, error }
//! ```

pub mod errors;
pub mod validation;
