use crate::PlacerError;
use crate::geometry::geo_traits::{CollidesWith, Shape, Transformable, TransformableFrom};
use crate::geometry::primitives::{Point, Rect};
use crate::geometry::{ExtremePoints, Translation};

/// Geometric primitive representing a polygon on the pixel grid.
///
/// The vertices are ordered and implicitly closed (the last vertex connects back to the first).
/// The order is preserved under translation. Fields are private: a polygon is a value,
/// moving it produces a new polygon (or overwrites a dedicated buffer, see [`TransformableFrom`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    points: Vec<Point>,
    bbox: Rect,
    extremes: ExtremePoints,
}

impl Polygon {
    pub fn try_new(points: Vec<Point>) -> Result<Self, PlacerError> {
        if points.len() < 3 {
            return Err(PlacerError::DegeneratePolygon {
                n_points: points.len(),
            });
        }
        let bbox = Rect::bounding(&points).expect("polygon has points");
        let extremes = ExtremePoints::from_points(&points).expect("polygon has points");

        Ok(Polygon {
            points,
            bbox,
            extremes,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn n_points(&self) -> usize {
        self.points.len()
    }

    pub fn extremes(&self) -> &ExtremePoints {
        &self.extremes
    }

    /// Edges as `(previous, current)` vertex pairs, starting with the closing edge
    /// from the last vertex to the first.
    pub fn edge_iter(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[(i + n - 1) % n], self.points[i]))
    }
}

impl Shape for Polygon {
    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl CollidesWith<Point> for Polygon {
    /// Even-odd ray casting: <https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm>
    ///
    /// An edge counts when the point's y lies in its y-span, lower bound inclusive and upper bound exclusive,
    /// and the point lies strictly right of the edge at that height.
    /// Points exactly on an edge have no guaranteed classification.
    fn collides_with(&self, point: &Point) -> bool {
        let Point(x, y) = *point;
        let mut inside = false;

        for (Point(x_p, y_p), Point(x_c, y_c)) in self.edge_iter() {
            let in_span = (y_c <= y && y < y_p) || (y_p <= y && y < y_c);
            if in_span {
                //x-coordinate where the edge crosses the horizontal line through the point
                let num = (x_p as i64 - x_c as i64) * (y as i64 - y_c as i64);
                let x_int = num as f64 / (y_p - y_c) as f64 + x_c as f64;
                if x as f64 > x_int {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

impl Transformable for Polygon {
    fn translate(&mut self, t: Translation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let Polygon {
            points,
            bbox,
            extremes,
        } = self;

        points.iter_mut().for_each(|p| {
            p.translate(t);
        });
        bbox.translate(t);
        extremes.translate(t);

        self
    }
}

impl TransformableFrom for Polygon {
    fn translate_from(&mut self, reference: &Self, t: Translation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let Polygon {
            points,
            bbox,
            extremes,
        } = self;

        debug_assert_eq!(points.len(), reference.points.len());
        for (p, ref_p) in points.iter_mut().zip(&reference.points) {
            *p = *ref_p;
            p.translate(t);
        }
        *bbox = reference.bbox;
        bbox.translate(t);
        *extremes = reference.extremes;
        extremes.translate(t);

        self
    }
}

impl TryFrom<Vec<(i32, i32)>> for Polygon {
    type Error = PlacerError;

    fn try_from(points: Vec<(i32, i32)>) -> Result<Self, Self::Error> {
        Polygon::try_new(points.into_iter().map(Point::from).collect())
    }
}

impl From<Rect> for Polygon {
    fn from(r: Rect) -> Self {
        Polygon::try_new(vec![
            Point(r.x_min, r.y_min),
            Point(r.x_min, r.y_max),
            Point(r.x_max, r.y_max),
            Point(r.x_max, r.y_min),
        ])
        .expect("a rectangle always has four corners")
    }
}
