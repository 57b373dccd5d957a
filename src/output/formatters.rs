//! Formatting utilities for terminal output

use std::time::Duration;

/// Format the letter pool as spaced capitals
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    letters
        .iter()
        .flat_map(|c| c.to_uppercase())
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a duration as `m:ss`
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_spaced_capitals() {
        assert_eq!(format_letters(&['т', 'о', 'с']), "Т О С");
        assert_eq!(format_letters(&[]), "");
    }

    #[test]
    fn duration_as_minutes_seconds() {
        assert_eq!(format_duration(Duration::from_secs(420)), "7:00");
        assert_eq!(format_duration(Duration::from_secs(65)), "1:05");
        assert_eq!(format_duration(Duration::from_millis(900)), "0:00");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(150.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
