// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations return `error::Result<T>`.  No panics in production
// paths; setup failures surface to the caller of `run`, and the binary turns
// them into a user-facing dialog.

use std::fmt;

/// The bootstrap step that a failing OS call belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `GetModuleHandleW` could not resolve the executable's module.
    ModuleHandle,
    /// `RegisterClassExW` rejected the window class.
    RegisterClass,
    /// `AdjustWindowRect` failed to grow the client rectangle.
    AdjustRect,
    /// `CreateWindowExW` returned a null handle.
    CreateWindow,
    /// `GetClientRect` failed on a live window.
    ClientRect,
    /// `PostMessageW` could not queue a message.
    PostMessage,
    /// `GetMessageW` returned -1.
    GetMessage,
}

impl Stage {
    /// Name shown in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ModuleHandle => "ModuleHandleFailed",
            Self::RegisterClass => "RegisterClassFailed",
            Self::AdjustRect => "AdjustRectFailed",
            Self::CreateWindow => "CreateWindowFailed",
            Self::ClientRect => "ClientRectFailed",
            Self::PostMessage => "PostMessageFailed",
            Self::GetMessage => "GetMessageFailed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every error the bootstrap can produce.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// An OS call failed; `code` is the `GetLastError()` value, or the raw
    /// HRESULT bits when the failure was not a Win32 error.
    #[error("{stage} (OS error {code:#010x})")]
    Os { stage: Stage, code: u32 },

    /// The requested window parameters cannot be honoured.
    #[error("invalid window configuration: {0}")]
    InvalidConfig(String),

    /// The host platform has no native window backend.
    #[error("native windows are not supported on this platform")]
    Unsupported,
}

impl BootstrapError {
    pub fn os(stage: Stage, code: u32) -> Self {
        Self::Os { stage, code }
    }

    /// The failing stage, if this is an OS error.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Os { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// The OS error code, if this is an OS error.
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Os { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Recover the Win32 error code from an HRESULT.
///
/// `FACILITY_WIN32` HRESULTs (`0x8007xxxx`) carry the original `GetLastError`
/// value in their low word.  Anything else is returned as-is.
pub(crate) fn win32_code_from_hresult(hresult: i32) -> u32 {
    // Reinterpret the bits; HRESULTs are conventionally displayed unsigned.
    let bits = hresult as u32;
    if bits & 0xFFFF_0000 == 0x8007_0000 {
        bits & 0xFFFF
    } else {
        bits
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BootstrapError>;
