// src/strength/patterns.rs

/// Substrings that mark a password as following a common pattern.
/// Matched case-insensitively.
pub const COMMON_PATTERNS: [&str; 6] = ["123", "abc", "qwerty", "password", "111", "000"];

/// First blocklisted pattern contained in `password`, in blocklist order.
pub fn find_common_pattern(password: &str) -> Option<&'static str> {
    let lowered = password.to_lowercase();
    COMMON_PATTERNS
        .iter()
        .copied()
        .find(|pattern| lowered.contains(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_each_pattern() {
        for pattern in COMMON_PATTERNS {
            let wrapped = format!("X{}y", pattern);
            assert_eq!(find_common_pattern(&wrapped), Some(pattern));
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(find_common_pattern("MyQWERTYpad"), Some("qwerty"));
        assert_eq!(find_common_pattern("PassWord!"), Some("password"));
        assert_eq!(find_common_pattern("xABCx"), Some("abc"));
    }

    #[test]
    fn test_first_in_blocklist_order() {
        assert_eq!(find_common_pattern("000abc123"), Some("123"));
    }

    #[test]
    fn test_no_pattern() {
        assert_eq!(find_common_pattern(""), None);
        assert_eq!(find_common_pattern("Xk9#mQ2$vL7!"), None);
        assert_eq!(find_common_pattern("12-3"), None);
    }
}
