//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Wall-clock time
//! - Document visibility
//! - Run seeds

/// Milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Seed for a new run, derived from the clock and a per-cabinet salt
pub fn clock_seed(salt: u64) -> u64 {
    (now_ms() as u64).wrapping_mul(2654435761).wrapping_add(salt)
}

/// Whether the page is currently shown
#[cfg(target_arch = "wasm32")]
pub fn document_visible() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.visibility_state() == web_sys::VisibilityState::Visible)
        .unwrap_or(false)
}

/// Native runs have no document; always visible
#[cfg(not(target_arch = "wasm32"))]
pub fn document_visible() -> bool {
    true
}
