use std::collections::HashMap;

use crate::math::{Point2, Vector2};
use crate::operations::placement::OrientedPlacement;
use crate::style::{ArrowheadShape, EdgeStyle, LineCap, LineJoin};

use super::{SceneNode, Surface};

/// A command received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Clear,
    LineStyle {
        width: f64,
        color: String,
        cap: LineCap,
        join: LineJoin,
    },
    MoveTo(Point2),
    LineTo(Point2),
    AttachMarker {
        node: SceneNode,
        vertices: [Point2; 3],
        pivot: Point2,
        scale: Vector2,
        fill: String,
    },
    AttachLabel(String),
    Place {
        node: SceneNode,
        placement: OrientedPlacement,
    },
}

/// Surface that records commands instead of drawing them.
///
/// `clear` drops recorded line commands, mirroring how a graphics node
/// forgets its geometry, so [`RecordingSurface::line_commands`] always
/// describes the current frame.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    placements: HashMap<SceneNode, OrientedPlacement>,
    label: Option<String>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded command since the last `clear`, plus node
    /// commands issued before it.
    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Returns only the `MoveTo` / `LineTo` commands.
    #[must_use]
    pub fn line_commands(&self) -> Vec<&SurfaceCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, SurfaceCommand::MoveTo(_) | SurfaceCommand::LineTo(_)))
            .collect()
    }

    /// Returns the `(from, to)` pairs of every drawn line.
    #[must_use]
    pub fn drawn_lines(&self) -> Vec<(Point2, Point2)> {
        let mut lines = Vec::new();
        let mut cursor = None;
        for command in &self.commands {
            match command {
                SurfaceCommand::MoveTo(at) => cursor = Some(*at),
                SurfaceCommand::LineTo(to) => {
                    if let Some(from) = cursor {
                        lines.push((from, *to));
                    }
                    cursor = Some(*to);
                }
                _ => {}
            }
        }
        lines
    }

    /// Returns the last placement applied to `node`.
    #[must_use]
    pub fn placement(&self, node: SceneNode) -> Option<&OrientedPlacement> {
        self.placements.get(&node)
    }

    /// Returns the attached label text.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.retain(|c| {
            matches!(
                c,
                SurfaceCommand::AttachMarker { .. } | SurfaceCommand::AttachLabel(_)
            )
        });
        self.commands.push(SurfaceCommand::Clear);
    }

    fn set_line_style(&mut self, style: &EdgeStyle) {
        self.commands.push(SurfaceCommand::LineStyle {
            width: style.width(),
            color: style.color().to_owned(),
            cap: style.cap(),
            join: style.join(),
        });
    }

    fn move_to(&mut self, at: Point2) {
        self.commands.push(SurfaceCommand::MoveTo(at));
    }

    fn line_to(&mut self, to: Point2) {
        self.commands.push(SurfaceCommand::LineTo(to));
    }

    fn attach_marker(&mut self, node: SceneNode, shape: &ArrowheadShape) {
        self.commands.push(SurfaceCommand::AttachMarker {
            node,
            vertices: *shape.vertices(),
            pivot: *shape.pivot(),
            scale: *shape.scale(),
            fill: shape.fill().to_owned(),
        });
    }

    fn attach_label(&mut self, text: &str) {
        self.label = Some(text.to_owned());
        self.commands.push(SurfaceCommand::AttachLabel(text.to_owned()));
    }

    fn place(&mut self, node: SceneNode, placement: &OrientedPlacement) {
        self.placements.insert(node, *placement);
        self.commands.push(SurfaceCommand::Place {
            node,
            placement: *placement,
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn drawn_lines_pair_moves_and_lines() {
        let mut surface = RecordingSurface::new();
        surface.move_to(Point2::new(0.0, 0.0));
        surface.line_to(Point2::new(5.0, 0.0));
        surface.move_to(Point2::new(10.0, 0.0));
        surface.line_to(Point2::new(15.0, 0.0));
        let lines = surface.drawn_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], (Point2::new(10.0, 0.0), Point2::new(15.0, 0.0)));
    }

    #[test]
    fn clear_keeps_attached_nodes() {
        let mut surface = RecordingSurface::new();
        surface.attach_label("depends on");
        surface.attach_marker(SceneNode::Head, &ArrowheadShape::default_head());
        surface.move_to(Point2::new(0.0, 0.0));
        surface.line_to(Point2::new(1.0, 0.0));
        surface.clear();

        assert!(surface.line_commands().is_empty());
        assert_eq!(surface.label(), Some("depends on"));
        assert_eq!(surface.commands().len(), 3);
        assert_eq!(surface.commands()[2], SurfaceCommand::Clear);
    }

    #[test]
    fn records_line_shape_and_marker_transform() {
        let mut surface = RecordingSurface::new();
        let style = EdgeStyle::new(3.0, "#222222").unwrap();
        surface.set_line_style(&style);
        surface.attach_marker(SceneNode::Tail, style.tail());

        assert_eq!(
            surface.commands()[0],
            SurfaceCommand::LineStyle {
                width: 3.0,
                color: "#222222".to_owned(),
                cap: LineCap::Round,
                join: LineJoin::Round,
            }
        );
        let SurfaceCommand::AttachMarker { pivot, scale, .. } = &surface.commands()[1] else {
            panic!("expected a marker command");
        };
        assert_eq!(*pivot, Point2::new(5.0, 3.0));
        assert_eq!(*scale, Vector2::new(-1.0, 1.0));
    }

    #[test]
    fn place_remembers_latest() {
        let mut surface = RecordingSurface::new();
        let a = OrientedPlacement::new(Point2::new(1.0, 1.0), 0.5);
        let b = OrientedPlacement::new(Point2::new(2.0, 2.0), 1.5);
        surface.place(SceneNode::Tail, &a);
        surface.place(SceneNode::Tail, &b);
        assert_eq!(surface.placement(SceneNode::Tail), Some(&b));
        assert_eq!(surface.placement(SceneNode::Head), None);
    }
}
