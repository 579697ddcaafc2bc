//! # 문자열 유틸리티
//!
//! 요청 검증에서 공통으로 쓰이는 문자열 판별 함수들입니다.

/// 문자열이 비어 있거나 공백 문자로만 이루어졌는지 확인합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("  \t"));
/// assert!(!is_blank(" a "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// 선택적 문자열 필드에 공백이 아닌 값이 있는지 확인합니다.
///
/// `None`, 빈 문자열, 공백 문자열은 모두 값이 없는 것으로 취급합니다.
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| !is_blank(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\n\t "));
        assert!(!is_blank("홍길동"));
        assert!(!is_blank("  a  "));
    }

    #[test]
    fn test_has_text() {
        assert!(has_text(Some("name")));
        assert!(!has_text(Some("   ")));
        assert!(!has_text(Some("")));
        assert!(!has_text(None));
    }
}
