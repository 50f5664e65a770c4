//! Embedded word lists
//!
//! Fallback word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/fallback.rs"));

/// Built-in words for a supported length, or `None` for any other length
#[must_use]
pub fn fallback_for(length: usize) -> Option<&'static [&'static str]> {
    match length {
        3 => Some(FALLBACK_3),
        4 => Some(FALLBACK_4),
        5 => Some(FALLBACK_5),
        6 => Some(FALLBACK_6),
        _ => None,
    }
}
