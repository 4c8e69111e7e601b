// ── Per-window context registry ───────────────────────────────────────────────
//
// The window procedure is registered with the class, not the window, and the
// OS passes it no user pointer.  Context for a window is therefore looked up
// by the message's target handle in this map.
//
// Windows belong to the thread that created them and their messages are
// dispatched on that thread only, so the map is thread-local and needs no
// locking.  All access goes through short borrows; callbacks run after the
// borrow is released so they may touch the registry themselves.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

/// Raw window handle value used as the map key.
pub type WindowKey = isize;

/// Callback run from the destroy branch of the window procedure.
pub type DestroyCallback = Box<dyn FnOnce(&WindowContext)>;

/// Bookkeeping attached to one live window.
pub struct WindowContext {
    /// Title the window was created with.
    pub title: String,
    /// Number of messages the window procedure received for this window
    /// since it was registered here.
    pub messages_seen: u64,
    /// Distinct message identifiers received.
    pub distinct: BTreeSet<u32>,
    on_destroy: Option<DestroyCallback>,
}

impl WindowContext {
    pub fn new(title: impl Into<String>, on_destroy: Option<DestroyCallback>) -> Self {
        Self {
            title: title.into(),
            messages_seen: 0,
            distinct: BTreeSet::new(),
            on_destroy,
        }
    }

    /// Whether message `msg` reached the window procedure.
    pub fn saw(&self, msg: u32) -> bool {
        self.distinct.contains(&msg)
    }
}

impl std::fmt::Debug for WindowContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowContext")
            .field("title", &self.title)
            .field("messages_seen", &self.messages_seen)
            .field("distinct", &self.distinct.len())
            .field("on_destroy", &self.on_destroy.is_some())
            .finish()
    }
}

thread_local! {
    static WINDOWS: RefCell<HashMap<WindowKey, WindowContext>> =
        RefCell::new(HashMap::new());
}

/// Attach `context` to `key`, replacing (and returning) any stale entry left
/// by a destroyed window whose handle value was reused.
pub fn insert(key: WindowKey, context: WindowContext) -> Option<WindowContext> {
    WINDOWS.with(|w| w.borrow_mut().insert(key, context))
}

/// Record that message `msg` was delivered to `key`.
///
/// Messages for unknown handles are ignored: the OS sends several before the
/// creation call returns and the context is attached.
pub fn record(key: WindowKey, msg: u32) {
    WINDOWS.with(|w| {
        if let Some(ctx) = w.borrow_mut().get_mut(&key) {
            ctx.messages_seen += 1;
            ctx.distinct.insert(msg);
        }
    });
}

/// Detach the context for `key` and run its destroy callback.
///
/// Returns the detached context so the caller can inspect it.
pub fn destroy(key: WindowKey) -> Option<WindowContext> {
    let mut ctx = WINDOWS.with(|w| w.borrow_mut().remove(&key))?;
    if let Some(callback) = ctx.on_destroy.take() {
        callback(&ctx);
    }
    Some(ctx)
}

/// Run `f` against the context for `key`, if attached.
pub fn with<R>(key: WindowKey, f: impl FnOnce(&WindowContext) -> R) -> Option<R> {
    WINDOWS.with(|w| w.borrow().get(&key).map(f))
}

/// Number of windows with an attached context on this thread.
pub fn len() -> usize {
    WINDOWS.with(|w| w.borrow().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    // Each #[test] runs on its own thread, so the thread-local map starts
    // empty in every test.

    #[test]
    fn record_counts_only_attached_windows() {
        record(1, 0x0001);
        assert_eq!(len(), 0);

        insert(1, WindowContext::new("a", None));
        record(1, 0x000F);
        record(1, 0x000F);
        record(1, 0x0000);
        record(2, 0x000F);

        assert_eq!(with(1, |c| c.messages_seen), Some(3));
        assert_eq!(with(1, |c| c.saw(0x0000)), Some(true));
        assert_eq!(with(1, |c| c.saw(0x0010)), Some(false));
        assert_eq!(with(2, |c| c.messages_seen), None);
    }

    #[test]
    fn destroy_runs_callback_once_and_detaches() {
        let hits = Rc::new(Cell::new(0));
        let seen = Rc::new(Cell::new(0));
        let (h, s) = (Rc::clone(&hits), Rc::clone(&seen));
        insert(
            7,
            WindowContext::new(
                "Demo",
                Some(Box::new(move |ctx| {
                    h.set(h.get() + 1);
                    s.set(ctx.messages_seen);
                })),
            ),
        );
        record(7, 0x0002);

        let ctx = destroy(7).expect("attached");
        assert_eq!(ctx.title, "Demo");
        assert_eq!(hits.get(), 1);
        assert_eq!(seen.get(), 1);
        assert_eq!(len(), 0);
        assert!(destroy(7).is_none());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn callback_may_reenter_registry() {
        insert(
            3,
            WindowContext::new(
                "outer",
                Some(Box::new(|_| {
                    insert(4, WindowContext::new("inner", None));
                })),
            ),
        );
        destroy(3);
        assert_eq!(with(4, |c| c.title.clone()), Some("inner".to_owned()));
    }

    #[test]
    fn insert_replaces_stale_entry() {
        insert(9, WindowContext::new("old", None));
        let stale = insert(9, WindowContext::new("new", None)).expect("stale");
        assert_eq!(stale.title, "old");
        assert_eq!(len(), 1);
    }
}
