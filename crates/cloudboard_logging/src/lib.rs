#![deny(missing_docs)]
//! Shared logging utilities for the cloudboard workspace.
//!
//! The `board_*` macros tag every record with the render pass it was logged
//! in, so a log file can be read back pass by pass. Work done outside the
//! dashboard loop (tests, startup) logs as pass 0.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current render pass number.
    static RENDER_PASS: Cell<u64> = const { Cell::new(0) };
}

/// Sets the render pass number for the current thread.
/// The dashboard loop calls this once per render pass.
pub fn set_render_pass(pass: u64) {
    RENDER_PASS.with(|v| v.set(pass));
}

/// Advances the render pass number for the current thread and returns the new value.
pub fn next_render_pass() -> u64 {
    RENDER_PASS.with(|v| {
        let next = v.get().wrapping_add(1);
        v.set(next);
        next
    })
}

/// Retrieves the render pass number for the current thread.
/// Returns 0 before the first pass.
pub fn render_pass() -> u64 {
    RENDER_PASS.with(|v| v.get())
}

/// Trace-level record tagged with the current render pass.
#[macro_export]
macro_rules! board_trace {
    ($($arg:tt)*) => {{
        log::trace!("[pass {}] {}", $crate::render_pass(), format_args!($($arg)*));
    }};
}

/// Debug-level record tagged with the current render pass.
#[macro_export]
macro_rules! board_debug {
    ($($arg:tt)*) => {{
        log::debug!("[pass {}] {}", $crate::render_pass(), format_args!($($arg)*));
    }};
}

/// Info-level record tagged with the current render pass.
#[macro_export]
macro_rules! board_info {
    ($($arg:tt)*) => {{
        log::info!("[pass {}] {}", $crate::render_pass(), format_args!($($arg)*));
    }};
}

/// Warn-level record tagged with the current render pass.
#[macro_export]
macro_rules! board_warn {
    ($($arg:tt)*) => {{
        log::warn!("[pass {}] {}", $crate::render_pass(), format_args!($($arg)*));
    }};
}

/// Error-level record tagged with the current render pass.
#[macro_export]
macro_rules! board_error {
    ($($arg:tt)*) => {{
        log::error!("[pass {}] {}", $crate::render_pass(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_pass_counts_per_thread() {
        set_render_pass(0);
        assert_eq!(render_pass(), 0);
        assert_eq!(next_render_pass(), 1);
        assert_eq!(next_render_pass(), 2);
        assert_eq!(render_pass(), 2);

        let other = std::thread::spawn(render_pass).join().unwrap();
        assert_eq!(other, 0);
    }
}
