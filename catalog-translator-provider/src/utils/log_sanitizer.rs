//! Log sanitization utilities.
//!
//! Keeps large response bodies (and the catalog text inside them) from
//! flooding debug logs.

/// Maximum number of bytes of a value that end up in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for safe logging.
///
/// Short strings come back unchanged. Longer ones are cut at the last char
/// boundary within the limit and suffixed with the total size, so a log
/// reader knows how much was elided.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... ({} bytes total)", &s[..cut], s.len())
}
