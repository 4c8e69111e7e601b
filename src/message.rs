// ── Message classification & loop state ───────────────────────────────────────
//
// Platform-independent decisions behind the window procedure and the message
// loop.  The Win32 side feeds raw values in and acts on what comes out, so the
// branching can be tested without a window.

/// `WM_DESTROY`: the window is being torn down.
pub const DESTROY: u32 = 0x0002;

/// What the window procedure does with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Post a quit message and report the message as handled (return 0).
    Quit,
    /// Hand the message to default processing and return its result.
    Default,
}

/// Decide how the window procedure treats message `msg`.
pub fn disposition(msg: u32) -> Disposition {
    match msg {
        DESTROY => Disposition::Quit,
        _ => Disposition::Default,
    }
}

/// State of the message loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// What the loop does after one retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStep {
    /// Translate and dispatch the retrieved message, keep running.
    Dispatch,
    /// The quit message arrived; leave the loop.
    Quit,
    /// The retrieval call itself failed.
    Fail,
}

impl LoopState {
    /// Advance on the `BOOL` returned by the blocking retrieval call.
    ///
    /// Zero means the quit message was retrieved, -1 means the call failed,
    /// anything else is a message to dispatch.  A terminated loop stays
    /// terminated.
    pub fn advance(&mut self, retrieved: i32) -> LoopStep {
        if *self == Self::Terminated {
            return LoopStep::Quit;
        }
        match retrieved {
            0 => {
                *self = Self::Terminated;
                LoopStep::Quit
            }
            -1 => {
                *self = Self::Terminated;
                LoopStep::Fail
            }
            _ => LoopStep::Dispatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_destroy_quits() {
        assert_eq!(disposition(DESTROY), Disposition::Quit);
        // WM_NULL, WM_CREATE, WM_CLOSE, WM_PAINT, WM_APP
        for msg in [0x0000, 0x0001, 0x0010, 0x000F, 0x8000] {
            assert_eq!(disposition(msg), Disposition::Default, "msg {msg:#x}");
        }
    }

    #[test]
    fn loop_dispatches_until_quit() {
        let mut state = LoopState::Running;
        assert_eq!(state.advance(1), LoopStep::Dispatch);
        assert_eq!(state.advance(1), LoopStep::Dispatch);
        assert_eq!(state, LoopState::Running);
        assert_eq!(state.advance(0), LoopStep::Quit);
        assert_eq!(state, LoopState::Terminated);
    }

    #[test]
    fn retrieval_failure_terminates() {
        let mut state = LoopState::Running;
        assert_eq!(state.advance(-1), LoopStep::Fail);
        assert_eq!(state, LoopState::Terminated);
    }

    #[test]
    fn terminated_loop_never_dispatches_again() {
        let mut state = LoopState::Terminated;
        assert_eq!(state.advance(1), LoopStep::Quit);
    }
}
