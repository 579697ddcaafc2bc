//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//!
//! ```text
//! dto/
//! ├── envelope.rs         # 공통 요청/응답 래퍼 (Envelope<T>, ErrorDetail)
//! └── users/
//!     └── request/        # 요청 DTO (클라이언트 → 서버)
//!         └── register_user_request.rs
//! ```
//!
//! 모든 필드는 JSON에서 snake_case 이름을 사용합니다.

pub mod envelope;
pub mod users;

pub use envelope::{Envelope, ErrorDetail};
