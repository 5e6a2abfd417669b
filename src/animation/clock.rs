use std::cell::RefCell;
use std::rc::Rc;

/// Identifies one requested frame callback.
///
/// Holding the handle of the pending frame is what keeps an animation
/// alive; cancelling it is the only way to stop the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    /// Wraps a host-specific request id (e.g. a `requestAnimationFrame` id).
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Host primitive that schedules "call me on the next frame".
///
/// The host calls back into the owner with the same handle when the frame
/// fires. A cancelled handle must never fire.
pub trait FrameScheduler {
    /// Requests one callback on the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels a pending request. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Lets several polylines share one scheduler.
///
/// Both methods mutably borrow the cell, and `on_frame` requests the next
/// frame through it. Collect fired handles and release the borrow before
/// delivering them: `let frames = clock.borrow_mut().advance();`.
impl<S: FrameScheduler> FrameScheduler for Rc<RefCell<S>> {
    fn request_frame(&mut self) -> FrameHandle {
        self.borrow_mut().request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.borrow_mut().cancel_frame(handle);
    }
}

/// Logical frame clock for headless hosts and tests.
///
/// Frames fire only when [`ManualClock::advance`] is called.
#[derive(Debug, Default)]
pub struct ManualClock {
    next_id: u64,
    pending: Vec<FrameHandle>,
    frames: u64,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires one frame: returns every pending handle and clears the queue.
    ///
    /// The caller delivers each handle to its owner, which typically
    /// requests the following frame.
    pub fn advance(&mut self) -> Vec<FrameHandle> {
        self.frames += 1;
        std::mem::take(&mut self.pending)
    }

    /// Returns the handles waiting for the next frame.
    #[must_use]
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    /// Returns the number of frames fired so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl FrameScheduler for ManualClock {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_and_advance() {
        let mut clock = ManualClock::new();
        let a = clock.request_frame();
        let b = clock.request_frame();
        assert_ne!(a, b);
        assert_eq!(clock.pending(), &[a, b]);

        let fired = clock.advance();
        assert_eq!(fired, vec![a, b]);
        assert!(clock.pending().is_empty());
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn cancelled_frame_never_fires() {
        let mut clock = ManualClock::new();
        let a = clock.request_frame();
        let b = clock.request_frame();
        clock.cancel_frame(a);
        clock.cancel_frame(FrameHandle::new(999));
        assert_eq!(clock.advance(), vec![b]);
    }

    #[test]
    fn shared_clock_schedules_through_rc() {
        let clock = Rc::new(RefCell::new(ManualClock::new()));
        let mut shared = Rc::clone(&clock);
        let handle = shared.request_frame();
        assert_eq!(clock.borrow().pending(), &[handle]);
        shared.cancel_frame(handle);
        assert!(clock.borrow().pending().is_empty());
    }

    #[test]
    fn fired_frames_reschedule_after_borrow_is_released() {
        let clock = Rc::new(RefCell::new(ManualClock::new()));
        let mut shared = Rc::clone(&clock);
        shared.request_frame();

        let frames = clock.borrow_mut().advance();
        for _ in frames {
            assert!(clock.try_borrow_mut().is_ok());
            shared.request_frame();
        }
        assert_eq!(clock.borrow().pending().len(), 1);
    }
}
