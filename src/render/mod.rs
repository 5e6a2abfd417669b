mod recording;

pub use recording::{RecordingSurface, SurfaceCommand};

use crate::math::Point2;
use crate::operations::placement::OrientedPlacement;
use crate::style::{ArrowheadShape, EdgeStyle};

/// Child nodes attached to a polyline's line node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneNode {
    Label,
    Head,
    Tail,
}

/// Scene-graph operations a polyline needs from its rendering engine.
///
/// Nothing is rasterized here. A host implements this on top of its scene
/// graph: a graphics node for the line, two polygon sprites for the
/// arrowheads and a text node for the label.
pub trait Surface {
    /// Removes every line command drawn so far. Child nodes are kept.
    fn clear(&mut self);

    /// Sets width, colour, cap and join for subsequent line commands.
    fn set_line_style(&mut self, style: &EdgeStyle);

    /// Starts a new sub-path at `at` without drawing.
    fn move_to(&mut self, at: Point2);

    /// Draws a straight line from the current position to `to`.
    fn line_to(&mut self, to: Point2);

    /// Creates the filled arrowhead polygon for `node` (`Head` or `Tail`).
    fn attach_marker(&mut self, node: SceneNode, shape: &ArrowheadShape);

    /// Creates the centred text node used as the edge label.
    fn attach_label(&mut self, text: &str);

    /// Moves and rotates a child node.
    fn place(&mut self, node: SceneNode, placement: &OrientedPlacement);
}
