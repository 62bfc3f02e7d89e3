//! Shared CLI output formatting with colors and structured display.

use std::io::IsTerminal;

/// Check if color output is enabled.
pub fn color_enabled() -> bool {
    // Respect NO_COLOR env (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    // Respect --no-color flag via our global flag
    if std::env::var("ROLLCALL_NO_COLOR").is_ok() {
        return false;
    }
    // Default: enable color if stderr (our human channel) is a terminal
    std::io::stderr().is_terminal()
}

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
pub struct Styled {
    use_color: bool,
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    /// Green checkmark symbol.
    pub fn ok_sym(&self) -> &str {
        if self.use_color {
            "\x1b[32m\u{2713}\x1b[0m"
        } else {
            "OK"
        }
    }

    /// Yellow warning symbol.
    pub fn warn_sym(&self) -> &str {
        if self.use_color {
            "\x1b[33m\u{26a0}\x1b[0m"
        } else {
            "??"
        }
    }

    pub fn green(&self, s: &str) -> String {
        if self.use_color {
            format!("{GREEN}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn yellow(&self, s: &str) -> String {
        if self.use_color {
            format!("{YELLOW}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn dim(&self, s: &str) -> String {
        if self.use_color {
            format!("{DIM}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn bold(&self, s: &str) -> String {
        if self.use_color {
            format!("{BOLD}{s}{RESET}")
        } else {
            s.to_string()
        }
    }
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

/// Print a labeled field line under a record heading.
pub fn print_field(s: &Styled, label: &str, value: Option<&str>) {
    match value {
        Some(v) => eprintln!("      {} {v}", s.dim(&format!("{label:<13}"))),
        None => eprintln!("      {} {}", s.dim(&format!("{label:<13}")), s.dim("-")),
    }
}

/// Print a coverage summary line (e.g. "email  24/30").
pub fn print_coverage(s: &Styled, label: &str, have: usize, total: usize) {
    eprintln!("    {}", coverage_line(s, label, have, total));
}

fn coverage_line(s: &Styled, label: &str, have: usize, total: usize) -> String {
    let counts = format!("{have}/{total}");
    if have == total {
        format!("{} {label:<13} {}", s.ok_sym(), s.green(&counts))
    } else {
        format!("{} {label:<13} {}", s.warn_sym(), s.yellow(&counts))
    }
}

/// Check if --quiet mode is active.
pub fn is_quiet() -> bool {
    std::env::var("ROLLCALL_QUIET").is_ok()
}

/// Check if --json mode is active.
pub fn is_json() -> bool {
    std::env::var("ROLLCALL_JSON").is_ok()
}

/// Print JSON output to stdout.
pub fn print_json(value: &serde_json::Value) {
    if let Ok(s) = serde_json::to_string_pretty(value) {
        println!("{s}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_line_colors_counts() {
        let s = Styled { use_color: true };
        let full = coverage_line(&s, "email", 3, 3);
        assert!(full.contains("\x1b[32m3/3\x1b[0m"));
        let partial = coverage_line(&s, "state", 1, 3);
        assert!(partial.contains("\x1b[33m1/3\x1b[0m"));
    }

    #[test]
    fn test_coverage_line_plain_without_color() {
        let s = Styled { use_color: false };
        assert_eq!(coverage_line(&s, "email", 2, 3), "?? email         2/3");
    }
}
