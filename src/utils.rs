use unicode_width::UnicodeWidthChar;

/// Truncate `s` to at most `max_width` terminal columns, appending "..." when
/// anything was cut. Width-aware because terms and definitions are routinely
/// CJK text, where one char occupies two columns and byte slicing would panic
/// mid-character.
pub fn truncate_display(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(1)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(1);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_display("apple", 20), "apple");
        assert_eq!(truncate_display("", 20), "");
    }

    #[test]
    fn long_strings_are_cut_with_ellipsis() {
        let s = "a very long definition that will not fit";
        let result = truncate_display(s, 20);
        assert_eq!(result, "a very long defin...");
        assert_eq!(result.chars().count(), 20);
    }

    #[test]
    fn exact_width_is_not_truncated() {
        assert_eq!(truncate_display("12345", 5), "12345");
    }

    #[test]
    fn wide_characters_count_as_two_columns() {
        // Each hangul syllable is two columns wide.
        let s = "달리다달리다달리다";
        let result = truncate_display(s, 10);
        // 3 syllables (6 columns) + "..." fits the 10-column budget.
        assert_eq!(result, "달리다...");
    }

    #[test]
    fn truncation_never_splits_a_character() {
        let s = "가나다라마바사";
        for width in 0..16 {
            // Would panic on a bad boundary; just exercise every width.
            let _ = truncate_display(s, width);
        }
    }
}
