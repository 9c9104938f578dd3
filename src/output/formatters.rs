//! Formatting utilities for terminal output

/// Fit `text` into `width` columns, marking cut text with an ellipsis
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        return format!("{text}{}", " ".repeat(width - count));
    }
    if width == 0 {
        return String::new();
    }

    let mut result: String = text.chars().take(width - 1).collect();
    result.push('…');
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_short_text() {
        assert_eq!(fit_to_width("Math", 8), "Math    ");
    }

    #[test]
    fn fit_keeps_exact_text() {
        assert_eq!(fit_to_width("Math", 4), "Math");
    }

    #[test]
    fn fit_truncates_long_text() {
        let fitted = fit_to_width("World Capitals", 8);
        assert_eq!(fitted, "World C…");
        assert_eq!(fitted.chars().count(), 8);
    }

    #[test]
    fn fit_counts_characters_not_bytes() {
        assert_eq!(fit_to_width("Café", 5), "Café ");
    }

    #[test]
    fn fit_zero_width() {
        assert_eq!(fit_to_width("anything", 0), "");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 30, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(30, 30, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(15, 30, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_no_clues() {
        assert_eq!(create_progress_bar(0, 0, 4), "░░░░");
    }
}
