//! Warn-once helper for deprecated configuration flags.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

static WARNED: Lazy<Mutex<HashSet<&'static str>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Logs a developer-facing warning the first time `original` is used.
///
/// Non-blocking: the deprecated flag keeps working as its replacement.
pub(crate) fn deprecate(original: &'static str, replacement: &'static str) {
    let mut warned = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if warned.insert(original) {
        log::warn!(
            "'{}' is deprecated, use '{}' instead",
            original,
            replacement
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warns_once_per_flag() {
        // First call inserts, later calls find the flag already recorded.
        deprecate("legacy-flag-test", "replacement");
        deprecate("legacy-flag-test", "replacement");
        let warned = WARNED.lock().unwrap();
        assert!(warned.contains("legacy-flag-test"));
    }
}
