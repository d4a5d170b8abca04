//! Seed data - canned fixtures the simulated backend and stores start from
//!
//! - `catalog`: songs, artists, albums, playlists, listener identity
//! - `creator`: creator identity, stats, uploads, analytics and earnings
//! - `social`: merchandise, events, messaging, comments, live streams

pub mod catalog;
pub mod creator;
pub mod social;

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{SecondsFormat, Utc};

static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Build a fresh identifier such as `playlist-1718000000000-3`.
///
/// Millisecond timestamp plus a process-wide sequence, so two ids minted in
/// the same millisecond still differ.
pub fn generate_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let seq = ID_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", prefix, millis, seq)
}

/// Current time as an RFC 3339 string with millisecond precision
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_and_prefixed() {
        let a = generate_id("payout");
        let b = generate_id("payout");
        assert!(a.starts_with("payout-"));
        assert_ne!(a, b);
    }

    #[test]
    fn timestamps_parse_back() {
        let stamp = now_iso();
        assert!(chrono::DateTime::parse_from_rfc3339(&stamp).is_ok());
    }
}
