// ── Window geometry ───────────────────────────────────────────────────────────
//
// Pure Rust mirror of the Win32 RECT plus the client/outer size arithmetic.
// The OS call that grows a rectangle for decorations lives in
// `platform::win32::window`; everything around it is computed here.

/// A bounding box in device pixels, edges inclusive-exclusive like `RECT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Rect {
    /// The zero-origin rectangle covering a client area of `size`.
    ///
    /// This is the input to the decoration adjustment: the OS grows it
    /// outward (negative left/top) by the border and caption extents.
    pub const fn client(size: Size) -> Self {
        Self {
            left: 0,
            top: 0,
            right: size.width,
            bottom: size.height,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Outer size to pass to window creation.
    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_rect_is_zero_origin() {
        let r = Rect::client(Size::new(800, 600));
        assert_eq!(r, Rect { left: 0, top: 0, right: 800, bottom: 600 });
        assert_eq!(r.size(), Size::new(800, 600));
    }

    #[test]
    fn adjusted_rect_size_includes_negative_origin() {
        // Typical overlapped-window frame: 8px borders, 31px caption.
        let adjusted = Rect { left: -8, top: -31, right: 808, bottom: 608 };
        assert_eq!(adjusted.size(), Size::new(816, 639));
    }

    #[test]
    fn unchanged_rect_keeps_client_size() {
        let r = Rect::client(Size::new(1, 1));
        assert_eq!((r.width(), r.height()), (1, 1));
    }
}
