//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 검증 및 응답 생성
//! ├─────────────────────────────────────────────┤
//!   Core - 검증 실패 변환, 에러 응답
//! ├─────────────────────────────────────────────┤
//!   Domain - 요청 DTO, Envelope
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 회원가입 엔드포인트 (`POST /api/user`)

pub mod users;
