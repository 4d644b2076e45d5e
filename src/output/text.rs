use std::fmt::Write;
use std::time::Duration;

use crate::aggregator::ScanReport;
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    elapsed: Option<Duration>,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            elapsed: None,
        }
    }

    #[must_use]
    pub const fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let mut output = String::new();

        for error in &report.file_errors {
            let line = format!("error: failed to read {}: {}", error.path.display(), error.message);
            let _ = writeln!(output, "{}", self.colorize(&line, ansi::YELLOW));
        }

        if report.is_clean() {
            let _ = writeln!(
                output,
                "{}",
                self.colorize("All locators passed validation", ansi::GREEN)
            );
        } else {
            for entry in &report.violations {
                let location = format!("{}:{}", entry.path.display(), entry.line);
                let reason = self.colorize(&entry.violation.to_string(), ansi::RED);
                let _ = writeln!(output, "{location}: {reason} -> {}", entry.text);
            }
        }

        let _ = writeln!(
            output,
            "Summary: {} file(s) scanned, {} declaration(s) checked, {} violation(s), {} unreadable file(s)",
            report.files_scanned,
            report.declarations_checked,
            report.violations.len(),
            report.file_errors.len()
        );

        if let Some(elapsed) = self.elapsed {
            let _ = writeln!(output, "Elapsed: {:.2}s", elapsed.as_secs_f64());
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
