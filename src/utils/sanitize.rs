use regex::Regex;
use std::sync::OnceLock;

static TAG_RE: OnceLock<Regex> = OnceLock::new();

/// Strips every HTML tag from free-text input. No markup is allowed in any
/// portfolio field, so there is no allow-list to maintain.
pub fn sanitize_input(input: &str) -> String {
    let re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
    re.replace_all(input, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(sanitize_input("Ada Lovelace"), "Ada Lovelace");
    }

    #[test]
    fn test_tags_are_removed() {
        assert_eq!(sanitize_input("<b>Ada</b> Lovelace"), "Ada Lovelace");
        assert_eq!(
            sanitize_input("<script>alert('x')</script>hello"),
            "alert('x')hello"
        );
    }

    #[test]
    fn test_tags_with_attributes_are_removed() {
        assert_eq!(
            sanitize_input(r#"<img src="x" onerror="steal()">portrait"#),
            "portrait"
        );
    }
}
