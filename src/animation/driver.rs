use tracing::{debug, trace};

use crate::operations::dash::DashCarry;
use crate::style::{AnimationParams, DashPattern};

use super::clock::{FrameHandle, FrameScheduler};

/// Snapshot of a driver's animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// `true` while a frame is pending.
    pub running: bool,
    /// Dash phase travelled since the last wrap, in `[0, total_length)`.
    pub elapsed_units: f64,
    /// Arc length of the path at the last draw.
    pub total_length: f64,
    /// Carry the next draw starts from.
    pub carry: DashCarry,
}

/// Advances the dash phase of one polyline once per frame.
///
/// Starts stopped. While running, exactly one frame is pending and its
/// handle is owned here; [`AnimationDriver::stop`] cancels it.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    params: AnimationParams,
    pattern: DashPattern,
    pending: Option<FrameHandle>,
    elapsed: f64,
    total_length: f64,
    carry: DashCarry,
}

impl AnimationDriver {
    /// Creates a stopped driver for `pattern`.
    #[must_use]
    pub fn new(params: AnimationParams, pattern: DashPattern) -> Self {
        Self {
            params,
            pattern,
            pending: None,
            elapsed: 0.0,
            total_length: 0.0,
            carry: DashCarry::default(),
        }
    }

    /// Requests the first frame. Does nothing if already running.
    pub fn start<F: FrameScheduler>(&mut self, scheduler: &mut F) {
        if self.pending.is_some() {
            return;
        }
        let handle = scheduler.request_frame();
        debug!(frame = handle.id(), "dash animation started");
        self.pending = Some(handle);
    }

    /// Cancels the pending frame. Does nothing if already stopped.
    pub fn stop<F: FrameScheduler>(&mut self, scheduler: &mut F) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
            debug!(frame = handle.id(), "dash animation stopped");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Handles a fired frame and returns `true` if the owner should redraw.
    ///
    /// Handles other than the pending one (stale or cancelled) are ignored.
    /// The phase advances by [`AnimationParams::step`]; once it reaches the
    /// path length it restarts at zero with a fresh carry.
    pub fn tick<F: FrameScheduler>(&mut self, frame: FrameHandle, scheduler: &mut F) -> bool {
        if self.pending != Some(frame) {
            trace!(frame = frame.id(), "ignoring stale frame");
            return false;
        }

        self.elapsed += self.params.step();
        if self.elapsed >= self.total_length {
            debug!(total_length = self.total_length, "dash offset wrapped");
            self.elapsed = 0.0;
            self.carry = DashCarry::default();
        } else {
            // Negative phase moves the pattern toward the head.
            self.carry = DashCarry::at_phase(&self.pattern, -self.elapsed);
        }

        self.pending = Some(scheduler.request_frame());
        true
    }

    /// Records the path length measured by the latest draw.
    pub fn set_total_length(&mut self, total_length: f64) {
        self.total_length = total_length;
    }

    /// Restarts the dash phase from the beginning of the pattern.
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.carry = DashCarry::default();
    }

    /// Returns the carry the next draw starts from.
    #[must_use]
    pub fn carry(&self) -> DashCarry {
        self.carry
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        AnimationState {
            running: self.is_running(),
            elapsed_units: self.elapsed,
            total_length: self.total_length,
            carry: self.carry,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::animation::ManualClock;
    use approx::assert_relative_eq;

    fn driver(time_constant: f64) -> AnimationDriver {
        AnimationDriver::new(
            AnimationParams::new(time_constant).unwrap(),
            DashPattern::default(),
        )
    }

    fn fire(driver: &mut AnimationDriver, clock: &mut ManualClock) -> bool {
        let mut redraw = false;
        for frame in clock.advance() {
            redraw |= driver.tick(frame, clock);
        }
        redraw
    }

    #[test]
    fn starts_stopped() {
        let d = driver(5.0);
        let state = d.state();
        assert!(!state.running);
        assert!(state.elapsed_units.abs() < f64::EPSILON);
        assert_eq!(state.carry, DashCarry::default());
    }

    #[test]
    fn start_requests_one_frame() {
        let mut clock = ManualClock::new();
        let mut d = driver(5.0);
        d.start(&mut clock);
        d.start(&mut clock);
        assert!(d.is_running());
        assert_eq!(clock.pending().len(), 1);
    }

    #[test]
    fn tick_advances_and_reschedules() {
        let mut clock = ManualClock::new();
        let mut d = driver(5.0);
        d.set_total_length(100.0);
        d.start(&mut clock);

        assert!(fire(&mut d, &mut clock));
        assert_relative_eq!(d.state().elapsed_units, 0.2, epsilon = 1e-12);
        assert_eq!(clock.pending().len(), 1);

        // Phase -0.2 ≡ 19.8: 0.2 left of the trailing gap.
        let carry = d.carry();
        assert_relative_eq!(carry.offset_remaining, 0.2, epsilon = 1e-9);
        assert_eq!(carry.pattern_index, 2);
    }

    #[test]
    fn stop_cancels_pending_frame() {
        let mut clock = ManualClock::new();
        let mut d = driver(5.0);
        d.set_total_length(100.0);
        d.start(&mut clock);
        d.stop(&mut clock);
        assert!(!d.is_running());
        assert!(clock.pending().is_empty());
        assert!(!fire(&mut d, &mut clock));
        d.stop(&mut clock);
    }

    #[test]
    fn stale_frame_is_ignored() {
        let mut clock = ManualClock::new();
        let mut d = driver(5.0);
        d.set_total_length(100.0);
        d.start(&mut clock);
        let stale = clock.advance()[0];
        assert!(d.tick(stale, &mut clock));
        assert!(!d.tick(stale, &mut clock));
        assert_relative_eq!(d.state().elapsed_units, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn elapsed_wraps_within_total_length() {
        let mut clock = ManualClock::new();
        let mut d = driver(1.0);
        d.set_total_length(7.5);
        d.start(&mut clock);

        let mut wrapped = false;
        for _ in 0..30 {
            fire(&mut d, &mut clock);
            let state = d.state();
            assert!(state.elapsed_units >= 0.0);
            assert!(state.elapsed_units < state.total_length);
            if state.elapsed_units.abs() < f64::EPSILON {
                wrapped = true;
                assert_eq!(state.carry, DashCarry::default());
            }
        }
        assert!(wrapped);
    }

    #[test]
    fn reset_clears_phase() {
        let mut clock = ManualClock::new();
        let mut d = driver(1.0);
        d.set_total_length(50.0);
        d.start(&mut clock);
        fire(&mut d, &mut clock);
        fire(&mut d, &mut clock);
        d.reset();
        assert!(d.state().elapsed_units.abs() < f64::EPSILON);
        assert_eq!(d.carry(), DashCarry::default());
        assert!(d.is_running());
    }
}
