//! # 회원가입 요청 DTO
//!
//! `POST /api/user` 요청의 `data` 필드에 담기는 회원가입 정보입니다.
//! `validator` 크레이트의 선언적 검증 규칙을 사용하며,
//! 필드 수준 검증 결과와 관계없이 구조체 수준의 name/nickname 규칙도 함께 검사하며,
//! 그 위반은 항상 목록의 마지막에 보고됩니다.
//!
//! `nick_name`, `birth_day_year_month` 키도 입력으로 받지만 응답에는
//! `nickname`, `birth_month`로 내보냅니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `name` / `nickname` | 둘 중 하나는 공백이 아닌 값이어야 함 |
//! | `password` | 필수, 공백 불가, 1-12자 |
//! | `age` | 필수, 1-100 |
//! | `email` | 이메일 형식 |
//! | `phone_number` | `xx(x)-xxx(x)-xxxx` 형식 |
//! | `register_at` | 현재 또는 미래 시각 |
//! | `birth_month` | `yyyy-MM` 형식 |
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "data": {
//!     "name": "홍길동",
//!     "password": "secret12",
//!     "age": 20,
//!     "email": "hong@example.com",
//!     "phone_number": "010-1234-5678",
//!     "register_at": "2030-01-01T09:00:00",
//!     "birth_month": "2004-05"
//!   }
//! }
//! ```

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::core::validation::{FieldOrder, REJECTED_VALUE_PARAM};
use crate::utils::string_utils::has_text;
use crate::utils::validators::{
    validate_age, validate_future_or_present, validate_password, validate_phone_number,
    validate_year_month,
};

/// name/nickname 규칙 위반 시 보고되는 필드 이름
pub const NAME_CHECK_FIELD: &str = "name_check";

/// name/nickname 규칙 위반 메시지
pub const NAME_CHECK_MESSAGE: &str = "name or nickname 은 존재해야 합니다.";

/// 회원가입 요청 DTO
///
/// 모든 필드는 JSON에서 생략 가능하며, 생략된 필드는 응답으로 되돌려줄 때도 생략됩니다.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_name_or_nickname", skip_on_field_errors = false))]
pub struct RegisterUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, alias = "nick_name", skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "must not be blank"),
        custom(function = "validate_password")
    )]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(
        required(message = "must not be null"),
        custom(function = "validate_age")
    )]
    pub age: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "must be a well-formed email address"))]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_phone_number"))]
    pub phone_number: Option<String>,

    /// 등록 시각 (`yyyy-MM-ddTHH:mm:ss`, 시간대 없음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_future_or_present"))]
    pub register_at: Option<NaiveDateTime>,

    /// 생년월 (`yyyy-MM`)
    #[serde(default, alias = "birth_day_year_month", skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_year_month"))]
    pub birth_month: Option<String>,
}

impl FieldOrder for RegisterUserRequest {
    const FIELD_ORDER: &'static [&'static str] = &[
        "name",
        "nickname",
        "password",
        "age",
        "email",
        "phone_number",
        "register_at",
        "birth_month",
    ];
}

// 비밀번호가 로그에 남지 않도록 직접 구현
impl fmt::Debug for RegisterUserRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterUserRequest")
            .field("name", &self.name)
            .field("nickname", &self.nickname)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("age", &self.age)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("register_at", &self.register_at)
            .field("birth_month", &self.birth_month)
            .finish()
    }
}

/// name 또는 nickname 중 하나는 공백이 아닌 값이어야 합니다.
fn validate_name_or_nickname(request: &RegisterUserRequest) -> Result<(), ValidationError> {
    if has_text(request.name.as_deref()) || has_text(request.nickname.as_deref()) {
        return Ok(());
    }

    let mut error = ValidationError::new(NAME_CHECK_FIELD).with_message(NAME_CHECK_MESSAGE.into());
    error.add_param(REJECTED_VALUE_PARAM.into(), &false);
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::OrderedValidate;
    use serde_json::json;

    fn valid_request() -> RegisterUserRequest {
        serde_json::from_value(json!({
            "name": "홍길동",
            "password": "secret12",
            "age": 20,
            "email": "hong@example.com",
            "phone_number": "010-1234-5678",
            "register_at": "2999-01-01T09:00:00",
            "birth_month": "2004-05"
        }))
        .unwrap()
    }

    fn messages(request: &RegisterUserRequest) -> Vec<String> {
        request
            .validate_ordered()
            .unwrap_err()
            .to_error_detail()
            .error_message
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate_ordered().is_ok());
    }

    #[test]
    fn test_minimal_request_passes() {
        let request = RegisterUserRequest {
            nickname: Some("gildong".to_string()),
            password: Some("pw".to_string()),
            age: Some(1),
            ..Default::default()
        };
        assert!(request.validate_ordered().is_ok());
    }

    #[test]
    fn test_missing_password_reports_one_violation() {
        let request = RegisterUserRequest {
            password: None,
            ..valid_request()
        };
        assert_eq!(messages(&request), vec!["password : { null } must not be blank"]);
    }

    #[test]
    fn test_missing_age_reports_one_violation() {
        let request = RegisterUserRequest {
            age: None,
            ..valid_request()
        };
        assert_eq!(messages(&request), vec!["age : { null } must not be null"]);
    }

    #[test]
    fn test_password_too_long() {
        let request = RegisterUserRequest {
            password: Some("abcdefghijklmn".to_string()),
            ..valid_request()
        };
        assert_eq!(
            messages(&request),
            vec!["password : { abcdefghijklmn } size must be between 1 and 12"]
        );
    }

    #[test]
    fn test_age_out_of_range_names_field_and_value() {
        for (age, expected) in [
            (0, "age : { 0 } must be greater than or equal to 1"),
            (101, "age : { 101 } must be less than or equal to 100"),
            (-5, "age : { -5 } must be greater than or equal to 1"),
        ] {
            let request = RegisterUserRequest {
                age: Some(age),
                ..valid_request()
            };
            assert_eq!(messages(&request), vec![expected]);
        }
    }

    #[test]
    fn test_invalid_email() {
        let request = RegisterUserRequest {
            email: Some("not-an-email".to_string()),
            ..valid_request()
        };
        let messages = messages(&request);

        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("email : { not-an-email }"));
        assert!(messages[0].ends_with("must be a well-formed email address"));
    }

    #[test]
    fn test_invalid_phone_number_and_birth_month() {
        let request = RegisterUserRequest {
            phone_number: Some("010.1234.5678".to_string()),
            birth_month: Some("2004-13".to_string()),
            ..valid_request()
        };
        assert_eq!(
            messages(&request),
            vec![
                "phone_number : { 010.1234.5678 } phone number must match the pattern xx(x)-xxx(x)-xxxx",
                "birth_month : { 2004-13 } must match the year-month pattern yyyy-MM",
            ]
        );
    }

    #[test]
    fn test_past_register_at() {
        let request = RegisterUserRequest {
            register_at: NaiveDateTime::parse_from_str("2000-01-01T00:00:00", "%Y-%m-%dT%H:%M:%S").ok(),
            ..valid_request()
        };
        assert_eq!(
            messages(&request),
            vec!["register_at : { 2000-01-01T00:00:00 } must be a date in the present or in the future"]
        );
    }

    #[test]
    fn test_name_and_nickname_both_blank() {
        let request = RegisterUserRequest {
            name: Some("  ".to_string()),
            nickname: None,
            ..valid_request()
        };
        assert_eq!(
            messages(&request),
            vec![format!("{} : {{ false }} {}", NAME_CHECK_FIELD, NAME_CHECK_MESSAGE)]
        );
    }

    #[test]
    fn test_either_name_or_nickname_is_enough() {
        let only_nickname = RegisterUserRequest {
            name: Some("".to_string()),
            nickname: Some("gildong".to_string()),
            ..valid_request()
        };
        let only_name = RegisterUserRequest {
            name: Some("홍길동".to_string()),
            nickname: Some(" ".to_string()),
            ..valid_request()
        };

        assert!(only_nickname.validate_ordered().is_ok());
        assert!(only_name.validate_ordered().is_ok());
    }

    #[test]
    fn test_every_failing_field_is_reported_in_declaration_order() {
        let request: RegisterUserRequest = serde_json::from_value(json!({
            "name": "홍길동",
            "password": "abcdefghijklmnop",
            "age": 150,
            "email": "bad",
            "phone_number": "123",
            "register_at": "2000-01-01T00:00:00",
            "birth_month": "May"
        }))
        .unwrap();

        let fields: Vec<String> = request
            .validate_ordered()
            .unwrap_err()
            .violations()
            .iter()
            .map(|v| v.field.clone())
            .collect();

        assert_eq!(
            fields,
            vec!["password", "age", "email", "phone_number", "register_at", "birth_month"]
        );
    }

    #[test]
    fn test_cross_field_rule_runs_alongside_field_rules() {
        let request: RegisterUserRequest = serde_json::from_value(json!({
            "password": "",
            "age": 150,
            "email": "bad"
        }))
        .unwrap();

        let messages = messages(&request);
        assert_eq!(messages.len(), 4);
        assert!(messages[0].starts_with("password : "));
        assert!(messages[1].starts_with("age : { 150 }"));
        assert!(messages[2].starts_with("email : { bad }"));
        assert_eq!(
            messages[3],
            format!("{} : {{ false }} {}", NAME_CHECK_FIELD, NAME_CHECK_MESSAGE)
        );
    }

    #[test]
    fn test_cross_field_rule_reported_last_with_single_field_error() {
        let request: RegisterUserRequest = serde_json::from_value(json!({
            "password": "x",
            "age": 150
        }))
        .unwrap();

        assert_eq!(
            messages(&request),
            vec![
                "age : { 150 } must be less than or equal to 100".to_string(),
                format!("{} : {{ false }} {}", NAME_CHECK_FIELD, NAME_CHECK_MESSAGE),
            ]
        );
    }

    #[test]
    fn test_wire_aliases_are_accepted() {
        let request: RegisterUserRequest = serde_json::from_value(json!({
            "nick_name": "gildong",
            "birth_day_year_month": "2004-05"
        }))
        .unwrap();

        assert_eq!(request.nickname.as_deref(), Some("gildong"));
        assert_eq!(request.birth_month.as_deref(), Some("2004-05"));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"nickname": "gildong", "birth_month": "2004-05"})
        );
    }

    #[test]
    fn test_empty_email_is_rejected() {
        let request = RegisterUserRequest {
            email: Some(String::new()),
            ..valid_request()
        };
        assert_eq!(
            messages(&request),
            vec!["email : {  } must be a well-formed email address"]
        );
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let request = RegisterUserRequest {
            nickname: Some("gildong".to_string()),
            age: Some(30),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"nickname": "gildong", "age": 30})
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", valid_request());
        assert!(!rendered.contains("secret12"));
        assert!(rendered.contains("<redacted>"));
    }
}
