//! Stand up a single native window and pump its message loop.
//!
//! [`run`] registers a window class, creates a top-level window whose client
//! area is exactly the requested size, shows it, and blocks on the calling
//! thread until the window is destroyed.  The steps are also available one
//! at a time through `platform::win32::window::Bootstrap` on Windows.

// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except `platform::win32` (Win32 FFI).
// Each unsafe block in that module MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod message;
pub mod platform;
pub mod registry;

pub use config::WindowConfig;
pub use error::{BootstrapError, Result, Stage};
pub use geometry::{Rect, Size};
pub use platform::{report_error, run_config};

#[cfg(windows)]
pub use platform::win32::window::{adjusted_window_size, Bootstrap, Window};

/// Create a `width` × `height` (client area) window titled `title` and block
/// until it is closed.
pub fn run(width: i32, height: i32, title: &str) -> Result<()> {
    let config = WindowConfig::new(width, height, title)?;
    run_config(&config).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_rejects_invalid_size_before_touching_the_os() {
        assert!(matches!(
            run(0, 600, "Demo"),
            Err(BootstrapError::InvalidConfig(_))
        ));
    }

    #[cfg(not(windows))]
    #[test]
    fn run_is_unsupported_without_a_backend() {
        assert!(matches!(
            run(800, 600, "Demo"),
            Err(BootstrapError::Unsupported)
        ));
    }
}
