//! Best score persistence
//!
//! A single integer stored as a decimal string under `best`, read once at
//! startup and written every time the score goes up.

use crate::platform::Storage;

/// Storage key
pub const STORAGE_KEY: &str = "best";

/// Parse a stored best score
///
/// Lenient like `parseInt`: leading whitespace is skipped and the leading
/// digits are used, so `"12px"` reads as 12. Anything else (empty, negative,
/// non-numeric, overflowing) reads as 0.
pub fn parse_best(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..digits_end].parse().unwrap_or(0)
}

/// Load the best score, defaulting to 0 when absent or unreadable
pub fn load_best(storage: &impl Storage) -> u32 {
    let best = storage
        .get_item(STORAGE_KEY)
        .map(|raw| parse_best(&raw))
        .unwrap_or(0);
    log::info!("Loaded best score: {}", best);
    best
}

/// Persist the best score
pub fn save_best(storage: &mut impl Storage, best: u32) {
    storage.set_item(STORAGE_KEY, &best.to_string());
    log::debug!("Best score saved ({})", best);
}
