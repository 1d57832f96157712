//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Join player names for narration: `"A"`, `"A and B"`, `"A, B and C"`.
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(|n| n.as_ref())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} and {}", head, last.as_ref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // Each of these characters is 3 bytes
        let s = "张伟王芳李娜";
        let t = truncate(s, 8);
        assert!(t.ends_with("..."));
        assert!(t.starts_with("张"));
    }

    #[test]
    fn test_join_names() {
        let empty: [&str; 0] = [];
        assert_eq!(join_names(&empty), "");
        assert_eq!(join_names(&["Alice"]), "Alice");
        assert_eq!(join_names(&["Alice", "Bob"]), "Alice and Bob");
        assert_eq!(join_names(&["Alice", "Bob", "Carol"]), "Alice, Bob and Carol");
    }
}
