use chrono::Local;

/// Submission timestamp, rendered with the configured format.
/// Set once when an entry is created and immutable after.
pub fn now_formatted(format: &str) -> String {
    Local::now().format(format).to_string()
}
