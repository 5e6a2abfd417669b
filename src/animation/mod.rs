mod clock;
mod driver;

pub use clock::{FrameHandle, FrameScheduler, ManualClock};
pub use driver::{AnimationDriver, AnimationState};
