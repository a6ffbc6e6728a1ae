use crate::geometry::GRAPH_SIZE;
use crate::math::Point2;

/// Maps a graph-space point to on-screen overlay coordinates.
///
/// The engine calls [`OverlayMapper::to_overlay`] once per region vertex.
pub trait OverlayMapper {
    fn to_overlay(&self, point: &Point2) -> Point2;
}

impl<F> OverlayMapper for F
where
    F: Fn(&Point2) -> Point2,
{
    fn to_overlay(&self, point: &Point2) -> Point2 {
        self(point)
    }
}

/// Leaves points untouched. Useful when the host has no overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityMapper;

impl OverlayMapper for IdentityMapper {
    fn to_overlay(&self, point: &Point2) -> Point2 {
        *point
    }
}

/// Axis-aligned scale + vertical flip between the graph square and a
/// pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMapper {
    /// Overlay position of the graph's top-left pixel.
    pub left: f64,
    pub top: f64,
    /// Pixel size of the graph area.
    pub width: f64,
    pub height: f64,
    /// Graph-space side length mapped onto `width`/`height`.
    pub graph_size: f64,
}

impl ViewportMapper {
    /// Creates a mapper for the default 500-unit graph square.
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            graph_size: GRAPH_SIZE,
        }
    }

    /// Inverse mapping: overlay pixels back to graph space.
    #[must_use]
    pub fn to_graph(&self, overlay: &Point2) -> Point2 {
        let sx = self.width / self.graph_size;
        let sy = self.height / self.graph_size;
        Point2::new(
            (overlay.x - self.left) / sx,
            self.graph_size - (overlay.y - self.top) / sy,
        )
    }
}

impl OverlayMapper for ViewportMapper {
    fn to_overlay(&self, point: &Point2) -> Point2 {
        let sx = self.width / self.graph_size;
        let sy = self.height / self.graph_size;
        Point2::new(
            self.left + point.x * sx,
            self.top + (self.graph_size - point.y) * sy,
        )
    }
}
