//! Coalescing of high-frequency events onto the next animation frame.

use std::cell::Cell;

/// At most one pending frame callback per owner.
///
/// Each scroll-driven controller owns its own gate, so a pending navigation frame never
/// swallows a parallax frame or the other way around.
#[derive(Debug, Default)]
pub struct FrameGate {
    scheduled: Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller must schedule a frame; `false` when one is
    /// already pending.
    pub fn request(&self) -> bool {
        !self.scheduled.replace(true)
    }

    /// Called from inside the frame callback once the writes are done.
    pub fn release(&self) {
        self.scheduled.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.scheduled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_schedules_once() {
        let gate = FrameGate::new();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());
    }

    #[test]
    fn release_reopens_gate() {
        let gate = FrameGate::new();
        assert!(gate.request());
        gate.release();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }

    #[test]
    fn gates_are_independent() {
        let nav = FrameGate::new();
        let parallax = FrameGate::new();
        assert!(nav.request());
        assert!(parallax.request());
    }
}
