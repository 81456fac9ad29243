//! Formatting utilities for counts and other display values.

/// Format an integer with `,` thousands separators (e.g., "45,000").
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Pick the singular or plural noun for a count.
pub fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Extra tags hidden behind a "+N" badge when only `shown` are displayed.
pub fn overflow_label(total: usize, shown: usize) -> Option<String> {
    (total > shown).then(|| format!("+{}", total - shown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(50), "50");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(5_000), "5,000");
        assert_eq!(format_count(45_000), "45,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "resource", "resources"), "resources");
        assert_eq!(pluralize(1, "resource", "resources"), "resource");
        assert_eq!(pluralize(12, "resource", "resources"), "resources");
    }

    #[test]
    fn test_overflow_label() {
        assert_eq!(overflow_label(4, 3), Some("+1".to_string()));
        assert_eq!(overflow_label(3, 3), None);
        assert_eq!(overflow_label(1, 3), None);
    }
}
