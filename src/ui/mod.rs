//! Terminal output helpers.

pub mod theme;

pub use theme::CairnTheme;

use std::time::Duration;

/// How much output a command should emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Standard output.
    #[default]
    Normal,

    /// Suppress summaries; exit code and log lines only.
    Quiet,

    /// Include extra detail such as the recorded event timeline.
    Verbose,
}

/// Format a duration for display.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs == 0 {
        format!("{}ms", millis)
    } else if secs < 60 {
        format!("{}.{}s", secs, millis / 100)
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_formats_correctly() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(5)), "5.0s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
    }

    #[test]
    fn output_mode_defaults_to_normal() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
