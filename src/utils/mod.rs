//! 공통 유틸리티 함수 모듈
//!
//! 요청 검증에 쓰이는 문자열 판별 함수와 커스텀 필드 검증 함수를 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 공백 판별 유틸리티
//! - [`validators`] - `#[validate(custom(...))]`용 검증 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::has_text;
//! use crate::utils::validators::validate_phone_number;
//!
//! assert!(has_text(Some("홍길동")));
//! assert!(validate_phone_number("010-1234-5678").is_ok());
//! ```

pub mod string_utils;
pub mod validators;
