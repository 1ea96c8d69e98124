use crate::geometry::Translation;
use crate::geometry::geo_traits::{CollidesWith, Transformable};
use crate::geometry::primitives::Point;

/// Axis-aligned rectangle on the pixel grid, inclusive on all sides
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub struct Rect {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl Rect {
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        debug_assert!(x_min <= x_max && y_min <= y_max, "invalid rectangle");
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Smallest rectangle containing all `points`, `None` if there are none.
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Rect::new(first.0, first.1, first.0, first.1);
        Some(points.iter().fold(init, |r, p| Rect {
            x_min: r.x_min.min(p.0),
            y_min: r.y_min.min(p.1),
            x_max: r.x_max.max(p.0),
            y_max: r.y_max.max(p.1),
        }))
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        i32::max(self.x_min, other.x_min) <= i32::min(self.x_max, other.x_max)
            && i32::max(self.y_min, other.y_min) <= i32::min(self.y_max, other.y_max)
    }
}

impl CollidesWith<Point> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }
}

impl Transformable for Rect {
    fn translate(&mut self, t: Translation) -> &mut Self {
        self.x_min += t.0;
        self.x_max += t.0;
        self.y_min += t.1;
        self.y_max += t.1;
        self
    }
}
