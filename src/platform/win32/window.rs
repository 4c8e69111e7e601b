// ── Bootstrap window ──────────────────────────────────────────────────────────
//
// Responsibilities in this file (unsafe confined here):
//   • Resolve the module handle and register the window class.
//   • Grow the requested client rect for decorations, then create the window.
//   • Show and paint it.
//   • Run the Win32 message loop.
//   • WndProc: WM_DESTROY posts WM_QUIT, everything else goes to DefWindowProcW.
//   • Expose a safe error-dialog helper for use by main().

#![allow(unsafe_code)]

use windows::{
    core::{w, HSTRING, PCWSTR},
    Win32::{
        Foundation::{FALSE, HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM},
        Graphics::Gdi::UpdateWindow,
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            AdjustWindowRect, CreateWindowExW, DefWindowProcW, DispatchMessageW, GetClientRect,
            GetMessageW, MessageBoxW, PostMessageW, PostQuitMessage, ShowWindow,
            TranslateMessage, CW_USEDEFAULT, HMENU, MB_ICONERROR, MB_OK, MSG, SW_SHOWNORMAL,
            WINDOW_EX_STYLE, WM_CLOSE, WS_OVERLAPPEDWINDOW,
        },
    },
};

use super::{class, last_error, os_error};
use crate::config::WindowConfig;
use crate::error::{Result, Stage};
use crate::geometry::{Rect, Size};
use crate::message::{disposition, Disposition, LoopState, LoopStep};
use crate::registry::{self, DestroyCallback, WindowContext, WindowKey};

// ── Public API ────────────────────────────────────────────────────────────────

/// Builder for the single bootstrap window.
pub struct Bootstrap {
    config: WindowConfig,
    on_destroy: Option<DestroyCallback>,
}

impl Bootstrap {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            on_destroy: None,
        }
    }

    /// Run `callback` when the window receives WM_DESTROY, just before the
    /// quit message is posted.
    pub fn with_on_destroy(mut self, callback: impl FnOnce(&WindowContext) + 'static) -> Self {
        self.on_destroy = Some(Box::new(callback));
        self
    }

    /// Register the class, create the window sized to the requested client
    /// area, then show and paint it.  Does not pump messages.
    pub fn create(self) -> Result<Window> {
        self.config.validate()?;

        // Startup benchmark: only compiled in debug builds.
        #[cfg(debug_assertions)]
        let t0 = std::time::Instant::now();

        // SAFETY: GetModuleHandleW(None) returns the .exe's own HMODULE, which is
        // valid for the process lifetime.
        let hmodule =
            unsafe { GetModuleHandleW(None) }.map_err(|e| os_error(Stage::ModuleHandle, &e))?;

        // HINSTANCE and HMODULE are the same value under the Win32 ABI; the
        // field conversion keeps this compiling whether or not the windows
        // crate models them as distinct types.
        let hinstance = HINSTANCE(hmodule.0);

        let class_name = HSTRING::from(self.config.class_name.as_str());
        class::register_class(hinstance, &class_name)?;

        let outer = adjusted_window_size(Size::new(self.config.width, self.config.height))?;
        log::debug!(
            "client {}x{} -> window {}x{}",
            self.config.width,
            self.config.height,
            outer.width,
            outer.height
        );

        let title = HSTRING::from(self.config.title.as_str());
        let hwnd = create_window(hinstance, &class_name, &title, outer)?;

        registry::insert(
            key(hwnd),
            WindowContext::new(self.config.title.clone(), self.on_destroy),
        );

        // SAFETY: hwnd was just returned by CreateWindowExW and is valid.
        // ShowWindow returns the previous visibility state; UpdateWindow returns
        // a success BOOL.  Both are best-effort and only traced.
        unsafe {
            let was_visible = ShowWindow(hwnd, SW_SHOWNORMAL);
            let painted = UpdateWindow(hwnd);
            log::trace!(
                "ShowWindow -> {}, UpdateWindow -> {}",
                was_visible.as_bool(),
                painted.as_bool()
            );
        }

        #[cfg(debug_assertions)]
        log::debug!(
            "window visible in {:.1} ms",
            t0.elapsed().as_secs_f64() * 1000.0
        );
        log::info!("window {:?} created", self.config.title);

        Ok(Window { hwnd })
    }
}

/// A created, visible top-level window owned by the calling thread.
#[derive(Debug)]
pub struct Window {
    hwnd: HWND,
}

impl Window {
    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Current client-area size.
    pub fn client_size(&self) -> Result<Size> {
        let mut rect = RECT::default();
        // SAFETY: hwnd is a window created on this thread; rect is writable.
        unsafe { GetClientRect(self.hwnd, &mut rect) }
            .map_err(|e| os_error(Stage::ClientRect, &e))?;
        Ok(from_win32(rect).size())
    }

    /// Queue message `msg` (no parameters) for this window.
    pub fn post(&self, msg: u32) -> Result<()> {
        // SAFETY: hwnd is valid; zero wparam/lparam carry no pointers.
        unsafe { PostMessageW(self.hwnd, msg, WPARAM(0), LPARAM(0)) }
            .map_err(|e| os_error(Stage::PostMessage, &e))
    }

    /// Ask the window to close, as its close control would.
    pub fn post_close(&self) -> Result<()> {
        self.post(WM_CLOSE)
    }

    /// Pump messages until WM_QUIT; returns the quit exit code.
    pub fn run_message_loop(self) -> Result<i32> {
        message_loop()
    }
}

/// Outer window size whose client area is exactly `client` for an
/// overlapped window without a menu.
pub fn adjusted_window_size(client: Size) -> Result<Size> {
    let mut rect = to_win32(Rect::client(client));
    // SAFETY: rect is a valid, writable RECT for the duration of the call.
    unsafe { AdjustWindowRect(&mut rect, WS_OVERLAPPEDWINDOW, FALSE) }
        .map_err(|e| os_error(Stage::AdjustRect, &e))?;
    Ok(from_win32(rect).size())
}

/// Show a modal error dialog with the given message.
///
/// Safe to call from any context; performs the UTF-16 conversion internally.
pub fn show_error_dialog(message: &str) {
    let text = HSTRING::from(message);

    // SAFETY: text is a valid NUL-terminated UTF-16 string that remains
    // allocated for the duration of the MessageBoxW call.
    // HWND::default() (null) means the dialog has no owner window.
    // Return value (button pressed) is intentionally unused for an error dialog.
    unsafe {
        let _ = MessageBoxW(
            HWND::default(),
            PCWSTR(text.as_ptr()),
            w!("Window Bootstrap: Fatal Error"),
            MB_OK | MB_ICONERROR,
        );
    }
}

// ── Window creation ───────────────────────────────────────────────────────────

fn create_window(
    hinstance: HINSTANCE,
    class_name: &HSTRING,
    title: &HSTRING,
    outer: Size,
) -> Result<HWND> {
    // SAFETY: class_name was just registered for hinstance; both strings are
    // NUL-terminated and outlive the call.  HWND::default() (null parent)
    // creates a top-level window; HMENU::default() means no menu; None for
    // lpParam: no creation data.
    let hwnd = unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE(0),
            PCWSTR(class_name.as_ptr()),
            PCWSTR(title.as_ptr()),
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            outer.width,
            outer.height,
            HWND::default(),
            HMENU::default(),
            hinstance,
            None,
        )
    }
    .map_err(|e| os_error(Stage::CreateWindow, &e))?;

    if hwnd.0.is_null() {
        return Err(last_error(Stage::CreateWindow));
    }

    Ok(hwnd)
}

// ── Message loop ──────────────────────────────────────────────────────────────

fn message_loop() -> Result<i32> {
    let mut msg = MSG::default();
    let mut state = LoopState::Running;

    loop {
        // SAFETY: &mut msg is a valid MSG pointer; HWND::default() retrieves
        // messages for all windows on this thread plus thread messages
        // (WM_QUIT among them); 0,0 filter accepts all.
        let ret = unsafe { GetMessageW(&mut msg, HWND::default(), 0, 0) };

        match state.advance(ret.0) {
            LoopStep::Quit => break,
            LoopStep::Fail => return Err(last_error(Stage::GetMessage)),
            LoopStep::Dispatch => unsafe {
                // SAFETY: msg was populated by a successful GetMessageW call.
                // TranslateMessage return value (whether it generated WM_CHAR)
                // and DispatchMessageW's LRESULT are intentionally unused.
                let _ = TranslateMessage(&msg);
                let _ = DispatchMessageW(&msg);
            },
        }
    }

    // WM_QUIT carries the PostQuitMessage exit code in wParam.
    let code = msg.wParam.0 as i32;
    log::info!("message loop finished (exit code {code})");
    Ok(code)
}

// ── Window procedure ──────────────────────────────────────────────────────────

// SAFETY: wnd_proc is registered as lpfnWndProc in WNDCLASSEXW.
// Windows guarantees that hwnd, msg, wparam, and lparam are valid for the
// lifetime of this call; we must not store hwnd beyond the message handler.
pub(crate) unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    registry::record(key(hwnd), msg);

    match disposition(msg) {
        Disposition::Quit => {
            if let Some(ctx) = registry::destroy(key(hwnd)) {
                log::debug!(
                    "window {:?} destroyed after {} messages",
                    ctx.title,
                    ctx.messages_seen
                );
            }
            // SAFETY: PostQuitMessage with exit code 0 is always safe to call
            // from WM_DESTROY. It posts WM_QUIT to the thread's message queue.
            PostQuitMessage(0);
            LRESULT(0)
        }
        Disposition::Default => {
            log::trace!("default processing for message {msg:#06x}");
            // SAFETY: hwnd and message parameters are valid — provided by Windows.
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

fn key(hwnd: HWND) -> WindowKey {
    hwnd.0 as WindowKey
}

fn to_win32(r: Rect) -> RECT {
    RECT {
        left: r.left,
        top: r.top,
        right: r.right,
        bottom: r.bottom,
    }
}

fn from_win32(r: RECT) -> Rect {
    Rect {
        left: r.left,
        top: r.top,
        right: r.right,
        bottom: r.bottom,
    }
}
