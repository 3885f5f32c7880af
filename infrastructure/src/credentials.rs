//! Environment-sourced credential resolution
//!
//! A credential counts as configured only if the variable is set, non-empty,
//! and not a recognizable placeholder (values like `your_openai_key` left in
//! from a sample env file). Absent and placeholder credentials take the same
//! policy path everywhere.

/// Analytic backend key (optional)
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Nuanced backend key (optional)
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";

/// Reasoning / synthesis backend key (required)
pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

/// Generic fallback for the synthesis backend key
pub const FALLBACK_API_KEY: &str = "API_KEY";

/// Resolve a credential by variable name
///
/// Returns `None` for absent, empty, or placeholder-valued credentials.
pub fn resolve(var: &str) -> Option<String> {
    normalize(std::env::var(var).ok())
}

fn normalize(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() || is_placeholder(trimmed) {
        return None;
    }
    Some(trimmed.to_string())
}

/// Recognize non-functional stand-in values from sample env files
fn is_placeholder(value: &str) -> bool {
    value.to_ascii_lowercase().contains("your_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_value_is_not_configured() {
        assert_eq!(normalize(None), None);
    }

    #[test]
    fn test_empty_and_whitespace_values_are_not_configured() {
        assert_eq!(normalize(Some(String::new())), None);
        assert_eq!(normalize(Some("   ".to_string())), None);
    }

    #[test]
    fn test_placeholder_values_are_not_configured() {
        assert_eq!(normalize(Some("your_openai_key".to_string())), None);
        assert_eq!(normalize(Some("sk-your_anthropic_key".to_string())), None);
        assert_eq!(normalize(Some("YOUR_GEMINI_KEY".to_string())), None);
    }

    #[test]
    fn test_real_looking_values_are_configured() {
        assert_eq!(
            normalize(Some("sk-abc123".to_string())),
            Some("sk-abc123".to_string())
        );
    }

    #[test]
    fn test_values_are_trimmed() {
        assert_eq!(
            normalize(Some("  sk-abc123\n".to_string())),
            Some("sk-abc123".to_string())
        );
    }
}
