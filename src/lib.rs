//! Directed, labeled polyline edges with animated dashing.
//!
//! A [`Polyline`] strokes a multi-segment path with a dash pattern whose
//! phase continues through every vertex, orients arrowheads on the first
//! and last segments and keeps a text label at half the arc length. An
//! [`AnimationDriver`](animation::AnimationDriver) advances the dash phase
//! once per frame, producing a marching-ants effect.
//!
//! Drawing is delegated to a host engine through [`render::Surface`], and
//! frames come from a host [`animation::FrameScheduler`].

pub mod animation;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod polyline;
pub mod render;
pub mod style;

pub use error::{PolyedgeError, Result};
pub use polyline::{DrawReport, Polyline, PolylineConfig};
