//! Lightweight debug logging gated by QTOY_DEBUG=1 (or `--debug`).
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

static FROM_ENV: OnceLock<bool> = OnceLock::new();
static FORCED: AtomicBool = AtomicBool::new(false);

pub fn is_enabled() -> bool {
    FORCED.load(Ordering::Relaxed)
        || *FROM_ENV.get_or_init(|| std::env::var("QTOY_DEBUG").ok().as_deref() == Some("1"))
}

/// Turn logging on regardless of the environment (used by `--debug`).
pub fn enable() {
    FORCED.store(true, Ordering::Relaxed);
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() { eprintln!("[qtoy] {}", format_args!($($arg)*)); }
    }};
}
