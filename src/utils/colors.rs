/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Grey out placeholder cells ("none", "unknown", empty) so real data
/// stands out in the entries table.
pub fn colorize_placeholder(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "none" || value.trim() == "unknown" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
