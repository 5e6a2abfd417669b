use tracing::{debug, trace, warn};

use crate::animation::{AnimationDriver, AnimationState, FrameHandle, FrameScheduler};
use crate::error::{GeometryError, Result};
use crate::math::vector_2d::path_length;
use crate::math::Point2;
use crate::operations::dash::DashCursor;
use crate::operations::placement::{
    HeadPlacement, LabelPlacement, OrientedPlacement, TailPlacement,
};
use crate::render::{SceneNode, Surface};
use crate::style::{AnimationParams, EdgeStyle};

/// Everything needed to build a [`Polyline`].
#[derive(Debug, Clone)]
pub struct PolylineConfig {
    pub style: EdgeStyle,
    pub points: Vec<Point2>,
    pub label: String,
    pub animation: AnimationParams,
}

impl PolylineConfig {
    /// Creates a config with default animation parameters.
    #[must_use]
    pub fn new(style: EdgeStyle, points: Vec<Point2>, label: impl Into<String>) -> Self {
        Self {
            style,
            points,
            label: label.into(),
            animation: AnimationParams::default(),
        }
    }

    /// Replaces the animation parameters.
    #[must_use]
    pub fn with_animation(mut self, animation: AnimationParams) -> Self {
        self.animation = animation;
        self
    }
}

/// Placements applied by one draw pass. `None` marks a node left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawReport {
    pub label: Option<OrientedPlacement>,
    pub head: Option<OrientedPlacement>,
    pub tail: Option<OrientedPlacement>,
}

/// A directed, labeled, dash-animated polyline edge.
///
/// Owns its surface, its animation driver and a scheduler handle. Every
/// redraw (host `draw` or animation frame) runs to completion under
/// `&mut self`. Dropping the polyline cancels its pending frame.
pub struct Polyline<S: Surface, F: FrameScheduler> {
    points: Vec<Point2>,
    style: EdgeStyle,
    label: String,
    surface: S,
    scheduler: F,
    driver: AnimationDriver,
}

impl<S: Surface, F: FrameScheduler> Polyline<S, F> {
    /// Builds the edge, draws it once and starts the dash animation.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are provided.
    pub fn new(config: PolylineConfig, mut surface: S, scheduler: F) -> Result<Self> {
        let PolylineConfig {
            style,
            points,
            label,
            animation,
        } = config;

        if points.len() < 2 {
            return Err(GeometryError::InsufficientPoints {
                required: 2,
                actual: points.len(),
            }
            .into());
        }

        surface.attach_label(&label);
        surface.attach_marker(SceneNode::Tail, style.tail());
        surface.attach_marker(SceneNode::Head, style.head());

        let driver = AnimationDriver::new(animation, style.dash_pattern().clone());
        let mut polyline = Self {
            points,
            style,
            label,
            surface,
            scheduler,
            driver,
        };
        polyline.redraw();
        polyline.start_animation();
        debug!(
            label = %polyline.label,
            points = polyline.points.len(),
            "polyline created"
        );
        Ok(polyline)
    }

    /// Replaces the path and redraws everything.
    ///
    /// Safe to call mid-animation; the dash phase is kept. With fewer than
    /// 2 points the line is cleared, the phase resets and no node moves.
    pub fn draw(&mut self, points: Vec<Point2>) -> DrawReport {
        self.points = points;
        self.redraw()
    }

    /// Delivers a fired frame. Returns `true` if the edge was redrawn.
    pub fn on_frame(&mut self, frame: FrameHandle) -> bool {
        if !self.driver.tick(frame, &mut self.scheduler) {
            return false;
        }
        trace!(frame = frame.id(), "animation frame");
        self.redraw();
        true
    }

    /// Starts the dash animation if it is stopped.
    pub fn start_animation(&mut self) {
        self.driver.start(&mut self.scheduler);
    }

    /// Stops the dash animation; the pending frame is cancelled.
    pub fn stop_animation(&mut self) {
        self.driver.stop(&mut self.scheduler);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.driver.is_running()
    }

    #[must_use]
    pub fn animation_state(&self) -> AnimationState {
        self.driver.state()
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn style(&self) -> &EdgeStyle {
        &self.style
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    fn redraw(&mut self) -> DrawReport {
        self.driver.set_total_length(path_length(&self.points));
        self.surface.clear();
        self.surface.set_line_style(&self.style);

        if self.points.len() < 2 {
            warn!(
                points = self.points.len(),
                "polyline needs at least 2 points, nothing drawn"
            );
            self.driver.reset();
            return DrawReport::default();
        }

        self.stroke();

        let label = match LabelPlacement::new(&self.points).execute() {
            Ok(Some(placement)) => {
                self.surface.place(SceneNode::Label, &placement);
                Some(placement)
            }
            Ok(None) => {
                trace!("path too short for a label, keeping last placement");
                None
            }
            Err(err) => {
                warn!(%err, "label placement skipped");
                None
            }
        };
        let head = HeadPlacement::new(&self.points).execute();
        let head = self.place_marker(SceneNode::Head, head);
        let tail = TailPlacement::new(&self.points).execute();
        let tail = self.place_marker(SceneNode::Tail, tail);

        DrawReport { label, head, tail }
    }

    fn stroke(&mut self) {
        let (spans, _) =
            DashCursor::new(self.style.dash_pattern()).path(&self.points, self.driver.carry());
        for span in spans.iter().filter(|s| s.visible) {
            self.surface.move_to(span.from);
            self.surface.line_to(span.to);
        }
    }

    fn place_marker(
        &mut self,
        node: SceneNode,
        placement: Result<OrientedPlacement>,
    ) -> Option<OrientedPlacement> {
        match placement {
            Ok(placement) => {
                self.surface.place(node, &placement);
                Some(placement)
            }
            Err(err) => {
                warn!(?node, %err, "marker placement skipped");
                None
            }
        }
    }
}

impl<S: Surface, F: FrameScheduler> Drop for Polyline<S, F> {
    fn drop(&mut self) {
        self.driver.stop(&mut self.scheduler);
    }
}
