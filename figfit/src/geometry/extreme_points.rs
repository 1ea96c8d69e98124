use crate::geometry::Translation;
use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::Point;

/// The topmost, leftmost, rightmost and bottommost vertices of a polygon.
///
/// Found in a single pass seeded with the first vertex. Left and right are tested as
/// mutually exclusive alternatives (a vertex that becomes the new `left` is not also tested
/// as a `right` candidate), and likewise top and bottom. When extremes coincide this decides
/// which vertex instance gets reported, so the branching is kept exactly as is.
/// Ties are won by the first vertex reaching the extreme value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtremePoints {
    /// Vertex with minimum y
    pub top: Point,
    /// Vertex with minimum x
    pub left: Point,
    /// Vertex with maximum x
    pub right: Point,
    /// Vertex with maximum y
    pub bottom: Point,
}

impl ExtremePoints {
    /// Scans `points` once. Returns `None` for an empty slice.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut ep = ExtremePoints {
            top: *first,
            left: *first,
            right: *first,
            bottom: *first,
        };

        for &p in rest {
            if p.x() < ep.left.x() {
                ep.left = p;
            } else if p.x() > ep.right.x() {
                ep.right = p;
            }
            if p.y() < ep.top.y() {
                ep.top = p;
            } else if p.y() > ep.bottom.y() {
                ep.bottom = p;
            }
        }
        Some(ep)
    }

    /// Horizontal extent: `right.x - left.x`
    pub fn width(&self) -> i32 {
        self.right.x() - self.left.x()
    }

    /// Vertical extent: `bottom.y - top.y`
    pub fn height(&self) -> i32 {
        self.bottom.y() - self.top.y()
    }
}

impl Transformable for ExtremePoints {
    fn translate(&mut self, t: Translation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let ExtremePoints {
            top,
            left,
            right,
            bottom,
        } = self;
        for p in [top, left, right, bottom] {
            p.translate(t);
        }
        self
    }
}
