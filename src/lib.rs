//! 회원가입 요청 검증 API
//!
//! 회원가입 DTO를 선언적 제약 조건으로 검증하고,
//! 결과를 균일한 성공/실패 Envelope로 돌려주는 Actix-web 기반 서비스입니다.
//!
//! # Features
//!
//! - **선언적 검증**: `validator` derive 기반 필드/구조체 검증
//! - **모든 위반 보고**: 첫 실패에서 멈추지 않고 모든 필드의 위반을 수집
//! - **결정적 순서**: 위반 목록은 필드 선언 순서로 정렬
//! - **공통 Envelope**: `result_code`, `result_message`, `data`, `error`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, JSON 설정
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 및 echo 응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │      Core       │ ← 검증 실패 변환, AppError
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Domain DTO    │ ← RegisterUserRequest, Envelope<T>
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_registration_api::core::validation::OrderedValidate;
//! use user_registration_api::domain::dto::Envelope;
//!
//! match request.validate_ordered() {
//!     Ok(()) => Envelope::ok(request),
//!     Err(failure) => failure.to_envelope(),
//! }
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod handlers;
pub mod routes;
pub mod utils;
