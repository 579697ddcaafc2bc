//! # 검증 실패 변환기
//!
//! `validator` 크레이트가 돌려주는 [`ValidationErrors`]를
//! 클라이언트에게 보여줄 순서 있는 위반 목록으로 바꿉니다.
//!
//! `ValidationErrors`는 내부적으로 `HashMap`이라 순회 순서가 매번 달라질 수 있습니다.
//! 각 DTO는 [`FieldOrder`]로 필드 선언 순서를 알려주고,
//! 변환기는 그 순서대로 위반 항목을 정렬합니다. 구조체 수준(`__all__`) 에러는 항상 마지막입니다.
//!
//! ## 메시지 형식
//!
//! ```text
//! <field> : { <rejected value> } <message>
//! password : { abcdefghijklmn } size must be between 1 and 12
//! age : { null } must not be null
//! ```

use std::fmt;

use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::dto::envelope::{Envelope, ErrorDetail};
use actix_web::http::StatusCode;

/// 구조체 수준 검증 에러가 저장되는 키
const SCHEMA_ERRORS_KEY: &str = "__all__";

/// 거부된 값을 담는 `ValidationError` 파라미터 이름
pub const REJECTED_VALUE_PARAM: &str = "value";

/// 필드 선언 순서를 제공하는 trait
///
/// 위반 목록의 정렬 기준으로 사용됩니다. 목록에 없는 필드는
/// 선언된 필드 뒤에 이름순으로 배치됩니다.
pub trait FieldOrder {
    const FIELD_ORDER: &'static [&'static str];
}

/// 검증 후 실패 시 순서가 보장된 [`ValidationFailure`]를 반환하는 확장 trait
pub trait OrderedValidate: Validate + FieldOrder {
    fn validate_ordered(&self) -> Result<(), ValidationFailure> {
        self.validate()
            .map_err(|errors| ValidationFailure::from_errors::<Self>(&errors))
    }
}

impl<T: Validate + FieldOrder> OrderedValidate for T {}

/// 하나의 제약 조건 위반
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub rejected_value: String,
    pub message: String,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        rejected_value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            rejected_value: rejected_value.into(),
            message: message.into(),
        }
    }

    fn from_validation_error(field: &str, error: &ValidationError) -> Self {
        // 구조체 수준 에러는 에러 코드를 필드 이름으로 사용
        let field = if field == SCHEMA_ERRORS_KEY {
            error.code.to_string()
        } else {
            field.to_string()
        };

        let rejected_value = error
            .params
            .get(REJECTED_VALUE_PARAM)
            .map(render_rejected_value)
            .unwrap_or_else(|| "null".to_string());

        let message = error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| error.code.to_string());

        Self::new(field, rejected_value, message)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {{ {} }} {}", self.field, self.rejected_value, self.message)
    }
}

/// 검증 실패 에러 종류
///
/// 필드 선언 순서로 정렬된 위반 목록과, 로깅용 원본 에러 문자열을 함께 보관합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    violations: Vec<Violation>,
    source: String,
}

impl ValidationFailure {
    /// `validator` 결과를 `T`의 필드 선언 순서대로 정렬하여 변환합니다.
    pub fn from_errors<T: FieldOrder + ?Sized>(errors: &ValidationErrors) -> Self {
        let mut grouped: Vec<(String, &Vec<ValidationError>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| (field.to_string(), errs))
            .collect();

        grouped.sort_by(|(a, _), (b, _)| {
            field_rank::<T>(a)
                .cmp(&field_rank::<T>(b))
                .then_with(|| a.cmp(b))
        });

        let violations = grouped
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter()
                    .map(move |error| Violation::from_validation_error(field, error))
            })
            .collect();

        Self {
            violations,
            source: errors.to_string(),
        }
    }

    /// 이미 만들어진 위반 목록으로 생성합니다.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        let source = violations
            .iter()
            .map(Violation::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self { violations, source }
    }

    /// 요청 Envelope에 `data`가 없는 경우
    pub fn missing_payload() -> Self {
        Self::from_violations(vec![Violation::new("data", "null", "must not be null")])
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// 프레임워크가 보고한 원본 에러 문자열
    pub fn source_message(&self) -> &str {
        &self.source
    }

    pub fn to_error_detail(&self) -> ErrorDetail {
        ErrorDetail::new(self.violations.iter().map(Violation::to_string).collect())
    }

    /// `400 Bad Request` 실패 Envelope로 변환합니다.
    pub fn to_envelope<T>(&self) -> Envelope<T> {
        Envelope::failure(StatusCode::BAD_REQUEST, self.to_error_detail())
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::error::Error for ValidationFailure {}

fn field_rank<T: FieldOrder + ?Sized>(field: &str) -> usize {
    if field == SCHEMA_ERRORS_KEY {
        return usize::MAX;
    }
    T::FIELD_ORDER
        .iter()
        .position(|declared| *declared == field)
        .unwrap_or(T::FIELD_ORDER.len())
}

/// 거부된 값을 메시지용 문자열로 표현합니다.
///
/// 문자열은 따옴표 없이, 그 외 값은 JSON 표기 그대로 사용합니다.
pub fn render_rejected_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
