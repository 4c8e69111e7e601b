// ── Window class registration ─────────────────────────────────────────────────
//
// The class carries the window procedure, so it must be registered before any
// window of that class is created: the OS delivers WM_NCCREATE / WM_CREATE
// from inside CreateWindowExW.

#![allow(unsafe_code)]

use std::ffi::c_void;

use windows::{
    core::{HSTRING, PCWSTR},
    Win32::{
        Foundation::{ERROR_CLASS_ALREADY_EXISTS, HINSTANCE},
        Graphics::Gdi::{COLOR_WINDOW, HBRUSH},
        UI::WindowsAndMessaging::{
            GetClassInfoExW, LoadCursorW, RegisterClassExW, IDC_ARROW, WNDCLASSEXW,
            WNDCLASS_STYLES,
        },
    },
};

use super::{last_error, os_error, window::wnd_proc};
use crate::error::{BootstrapError, Result, Stage};

/// Register `class_name` for `hinstance` with this crate's window procedure.
///
/// Registering a name that is already bound to the same procedure succeeds
/// without registering again, so repeated bootstraps in one process are fine.
/// A name already bound to a different procedure fails with
/// `RegisterClassFailed` / `ERROR_CLASS_ALREADY_EXISTS`.
pub(crate) fn register_class(hinstance: HINSTANCE, class_name: &HSTRING) -> Result<()> {
    let name = PCWSTR(class_name.as_ptr());

    if let Some(registered) = existing_class(hinstance, class_name) {
        return registered;
    }

    // SAFETY: LoadCursorW with IDC_ARROW always succeeds; the arrow cursor is
    // a built-in resource guaranteed to exist on all Windows versions.
    let cursor =
        unsafe { LoadCursorW(None, IDC_ARROW) }.map_err(|e| os_error(Stage::RegisterClass, &e))?;

    // A system colour index + 1 is accepted in place of a brush handle.
    let background = HBRUSH((COLOR_WINDOW.0 + 1) as isize as *mut c_void);

    let wndclass = WNDCLASSEXW {
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        style: WNDCLASS_STYLES(0),
        lpfnWndProc: Some(wnd_proc),
        cbClsExtra: 0,
        cbWndExtra: 0,
        hInstance: hinstance,
        hIcon: Default::default(),
        hCursor: cursor,
        hbrBackground: background,
        lpszMenuName: PCWSTR::null(),
        lpszClassName: name,
        hIconSm: Default::default(),
    };

    // SAFETY: wndclass is fully initialised with valid (or null) handles;
    // lpszClassName points into `class_name`, which outlives the call.
    let atom = unsafe { RegisterClassExW(&wndclass) };
    if atom == 0 {
        let err = last_error(Stage::RegisterClass);
        // Another thread may have won the race between the lookup above and
        // this call; an identical registration is still a success.
        if err.code() == Some(ERROR_CLASS_ALREADY_EXISTS.0) {
            if let Some(registered) = existing_class(hinstance, class_name) {
                return registered;
            }
        }
        return Err(err);
    }

    log::debug!("registered window class {class_name} (atom {atom:#06x})");
    Ok(())
}

/// Look up `class_name`; `None` if no such class is registered.
fn existing_class(hinstance: HINSTANCE, class_name: &HSTRING) -> Option<Result<()>> {
    let mut existing = WNDCLASSEXW {
        // WNDCLASSEXW is ~80 bytes; the cast to u32 is always lossless.
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        ..Default::default()
    };
    // SAFETY: the name points into `class_name`, a NUL-terminated UTF-16
    // buffer that outlives the call; `existing` is a valid, writable
    // WNDCLASSEXW with cbSize set as the API requires.
    unsafe { GetClassInfoExW(hinstance, PCWSTR(class_name.as_ptr()), &mut existing) }.ok()?;

    if existing.lpfnWndProc.map(|f| f as usize) == Some(wnd_proc as usize) {
        log::debug!("window class {class_name} already registered");
        return Some(Ok(()));
    }
    log::warn!("window class {class_name} is registered with a foreign procedure");
    Some(Err(BootstrapError::os(
        Stage::RegisterClass,
        ERROR_CLASS_ALREADY_EXISTS.0,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::{
        Foundation::{HWND, LPARAM, LRESULT, WPARAM},
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::DefWindowProcW,
    };

    fn hinstance() -> HINSTANCE {
        let module = unsafe { GetModuleHandleW(None) }.expect("module handle");
        HINSTANCE(module.0)
    }

    unsafe extern "system" fn foreign_proc(
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        DefWindowProcW(hwnd, msg, wparam, lparam)
    }

    #[test]
    fn registering_same_descriptor_twice_succeeds() {
        let name = HSTRING::from("WindowBootstrapClassTwice");
        register_class(hinstance(), &name).expect("first registration");
        register_class(hinstance(), &name).expect("second registration");
    }

    #[test]
    fn foreign_procedure_is_rejected() {
        let name = HSTRING::from("WindowBootstrapClassForeignProc");
        let wc = WNDCLASSEXW {
            cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
            lpfnWndProc: Some(foreign_proc),
            hInstance: hinstance(),
            lpszClassName: PCWSTR(name.as_ptr()),
            ..Default::default()
        };
        assert_ne!(unsafe { RegisterClassExW(&wc) }, 0);

        let err = register_class(hinstance(), &name).expect_err("foreign class");
        assert_eq!(err.stage(), Some(Stage::RegisterClass));
        assert_eq!(err.code(), Some(ERROR_CLASS_ALREADY_EXISTS.0));
    }
}
