//! Opt-in trace output for tree construction and export
//!
//! Tracing is off unless `CONTRACT_AST_DEBUG` is set in the environment or a caller switches it
//! on. Messages go to stderr, tagged with the subsystem that emitted them.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

pub const DEBUG_ENV_VAR: &str = "CONTRACT_AST_DEBUG";

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

static INIT: Once = Once::new();

fn init_from_env() {
    INIT.call_once(|| {
        if std::env::var_os(DEBUG_ENV_VAR).is_some() {
            DEBUG_ENABLED.store(true, Ordering::Relaxed);
        }
    });
}

pub fn enable_debug() {
    set_debug(true);
}

pub fn disable_debug() {
    set_debug(false);
}

/// Overrides the environment setting; returns the previous state
pub fn set_debug(enabled: bool) -> bool {
    init_from_env();
    DEBUG_ENABLED.swap(enabled, Ordering::Relaxed)
}

pub fn is_debug_enabled() -> bool {
    init_from_env();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Switches tracing on or off until dropped, then restores the previous state
pub struct DebugGuard {
    previous: bool,
}

impl DebugGuard {
    pub fn new(enabled: bool) -> Self {
        Self {
            previous: set_debug(enabled),
        }
    }
}

impl Drop for DebugGuard {
    fn drop(&mut self) {
        DEBUG_ENABLED.store(self.previous, Ordering::Relaxed);
    }
}

/// Prints `[contract-ast:<tag>] message` to stderr when tracing is enabled
///
/// ```ignore
/// debug_println!("stmt", "else block attached to IF at {}", pos);
/// ```
#[macro_export]
macro_rules! debug_println {
    ($tag:literal, $($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!("[contract-ast:{}] {}", $tag, format_args!($($arg)*));
        }
    };
}
