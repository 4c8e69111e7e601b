// ── Platform abstraction layer ────────────────────────────────────────────────
//
// This module defines the interface that the rest of the crate uses to talk to
// the OS.  No `unsafe` lives here; all Win32 FFI is confined to the `win32`
// sub-module and never leaks outward.  Targets without a backend get the same
// entry points, failing with `BootstrapError::Unsupported`.

#[cfg(windows)]
pub mod win32;

use crate::config::WindowConfig;
use crate::error::Result;

/// Create the configured window and pump messages until it is destroyed.
///
/// Returns the exit code carried by the quit message.
pub fn run_config(config: &WindowConfig) -> Result<i32> {
    config.validate()?;
    run_native(config)
}

#[cfg(windows)]
fn run_native(config: &WindowConfig) -> Result<i32> {
    win32::window::Bootstrap::new(config.clone())
        .create()?
        .run_message_loop()
}

#[cfg(not(windows))]
fn run_native(_config: &WindowConfig) -> Result<i32> {
    log::error!("no native window backend for this target");
    Err(crate::error::BootstrapError::Unsupported)
}

/// Report a fatal error to the user.
///
/// A modal dialog on Windows, where a release build has no console;
/// standard error elsewhere.
pub fn report_error(message: &str) {
    log::error!("{message}");

    #[cfg(windows)]
    win32::window::show_error_dialog(message);

    #[cfg(not(windows))]
    eprintln!("window-bootstrap: {message}");
}
