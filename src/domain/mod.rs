//! # Domain Module
//!
//! API 경계의 데이터 구조(DTO)를 담는 도메인 계층입니다.
//! 영속 계층이 없으므로 엔티티 없이 요청/응답 DTO만 정의합니다.

pub mod dto;
