// ── Win32 platform implementation ─────────────────────────────────────────────
//
// This is the only module in the crate where `unsafe` code is permitted.
// Every `unsafe` block MUST carry a `// SAFETY:` comment that states:
//   • which invariant makes the operation sound, and
//   • what the caller is responsible for maintaining.
//
// Nothing in this module is `pub` beyond what callers genuinely need; keep the
// unsafe surface as small as possible.

#![allow(unsafe_code)]

use windows::Win32::Foundation::GetLastError;

use crate::error::{win32_code_from_hresult, BootstrapError, Stage};

// ── Sub-modules ───────────────────────────────────────────────────────────────

pub(crate) mod class; // window class registration
pub mod window; // bootstrap steps, WndProc, message loop

// ── Error helpers ─────────────────────────────────────────────────────────────

/// Capture the current Win32 last-error code for `stage`.
///
/// Call immediately after a Win32 function that signals failure — `GetLastError`
/// reads thread-local state that can be overwritten by any subsequent API call.
pub(crate) fn last_error(stage: Stage) -> BootstrapError {
    // SAFETY: GetLastError reads thread-local state set by the last Win32 call.
    // It is always safe to call and never fails.
    let code = unsafe { GetLastError() };
    BootstrapError::os(stage, code.0)
}

/// Attribute a windows-crate error to `stage`, keeping the Win32 code.
pub(crate) fn os_error(stage: Stage, e: &windows::core::Error) -> BootstrapError {
    BootstrapError::os(stage, win32_code_from_hresult(e.code().0))
}
