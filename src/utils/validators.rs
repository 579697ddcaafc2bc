//! # 커스텀 필드 검증 함수
//!
//! `#[validate(custom(function = "..."))]`에서 호출되는 검증 함수들입니다.
//! 모든 함수는 실패 시 거부된 값을 `value` 파라미터로 첨부하여
//! 에러 메시지에 원래 입력값이 표시되도록 합니다.
//!
//! | 함수 | 규칙 |
//! |------|------|
//! | [`validate_password`] | 공백 불가, 1-12자 |
//! | [`validate_age`] | 1 이상 100 이하 |
//! | [`validate_phone_number`] | `xx(x)-xxx(x)-xxxx` 형식 |
//! | [`validate_future_or_present`] | 현재 또는 미래 시각 |
//! | [`validate_year_month`] | `yyyy-MM` 형식의 실제 연월 |

use std::borrow::Cow;

use chrono::{Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

use crate::core::validation::REJECTED_VALUE_PARAM;
use crate::utils::string_utils::is_blank;

pub const PASSWORD_MIN_LENGTH: usize = 1;
pub const PASSWORD_MAX_LENGTH: usize = 12;
pub const AGE_MIN: i64 = 1;
pub const AGE_MAX: i64 = 100;

/// 전화번호 형식 (예: `010-1234-5678`, `02-123-4567`)
///
/// ASCII 숫자만 허용 (`\d`는 유니코드 숫자 전체와 매칭됨)
static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2,3}-[0-9]{3,4}-[0-9]{4}$").expect("valid phone number regex"));

/// `yyyy-MM` 형식, ASCII 숫자만 (월의 범위는 날짜 파싱으로 확인)
static YEAR_MONTH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}$").expect("valid year-month regex"));

/// 거부된 값과 메시지를 담은 `ValidationError`를 생성합니다.
fn rejected<T: Serialize + ?Sized>(
    code: &'static str,
    message: impl Into<Cow<'static, str>>,
    value: &T,
) -> ValidationError {
    let mut error = ValidationError::new(code).with_message(message.into());
    error.add_param(Cow::from(REJECTED_VALUE_PARAM), &value);
    error
}

/// 비밀번호: 공백이 아니어야 하며 1-12자 사이여야 합니다.
///
/// 필드당 하나의 위반만 보고하도록 공백 검사에 실패하면 길이 검사는 건너뜁니다.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if is_blank(password) {
        return Err(rejected("not_blank", "must not be blank", password));
    }

    let length = password.chars().count();
    if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&length) {
        return Err(rejected(
            "size",
            format!(
                "size must be between {} and {}",
                PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
            ),
            password,
        ));
    }

    Ok(())
}

/// 나이: 1 이상 100 이하
pub fn validate_age(age: i64) -> Result<(), ValidationError> {
    if age < AGE_MIN {
        return Err(rejected(
            "min",
            format!("must be greater than or equal to {}", AGE_MIN),
            &age,
        ));
    }
    if age > AGE_MAX {
        return Err(rejected(
            "max",
            format!("must be less than or equal to {}", AGE_MAX),
            &age,
        ));
    }
    Ok(())
}

pub fn validate_phone_number(phone_number: &str) -> Result<(), ValidationError> {
    if PHONE_NUMBER_REGEX.is_match(phone_number) {
        return Ok(());
    }
    Err(rejected(
        "phone_number",
        "phone number must match the pattern xx(x)-xxx(x)-xxxx",
        phone_number,
    ))
}

/// 등록 시각은 현재(로컬 시계 기준) 이후여야 합니다.
pub fn validate_future_or_present(at: &NaiveDateTime) -> Result<(), ValidationError> {
    check_future_or_present(at, &Local::now().naive_local())
}

fn check_future_or_present(at: &NaiveDateTime, now: &NaiveDateTime) -> Result<(), ValidationError> {
    if at >= now {
        return Ok(());
    }
    Err(rejected(
        "future_or_present",
        "must be a date in the present or in the future",
        at,
    ))
}

/// `yyyy-MM` 형식의 연월인지 검사합니다.
///
/// 해당 월의 1일로 날짜를 만들어 보고, 만들 수 없으면(예: `2024-13`) 실패입니다.
pub fn validate_year_month(year_month: &str) -> Result<(), ValidationError> {
    let parsed = YEAR_MONTH_REGEX.is_match(year_month)
        && NaiveDate::parse_from_str(&format!("{}-01", year_month), "%Y-%m-%d").is_ok();

    if parsed {
        return Ok(());
    }
    Err(rejected(
        "year_month",
        "must match the year-month pattern yyyy-MM",
        year_month,
    ))
}
