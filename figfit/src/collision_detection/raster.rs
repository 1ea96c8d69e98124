use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Point, Polygon};

/// Pixel dimensions of the source image, which bound every raster canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether the pixel lies on the canvas
    pub fn contains(&self, p: Point) -> bool {
        p.x() >= 0 && p.y() >= 0 && (p.x() as u32) < self.width && (p.y() as u32) < self.height
    }
}

/// Binary canvas the size of the source image with a single polygon outline drawn on it.
///
/// The outline is one pixel thick and 8-connected. Pixels falling outside the canvas are clipped.
#[derive(Clone, Debug)]
pub struct OutlineMask {
    /// Indexed as `[y, x]`
    mask: Array2<bool>,
    canvas: CanvasSize,
}

impl OutlineMask {
    pub fn render(polygon: &Polygon, canvas: CanvasSize) -> Self {
        let mut mask = Array2::from_elem((canvas.height as usize, canvas.width as usize), false);
        for p in outline_pixels(polygon).filter(|p| canvas.contains(*p)) {
            mask[[p.y() as usize, p.x() as usize]] = true;
        }
        OutlineMask { mask, canvas }
    }

    pub fn is_set(&self, p: Point) -> bool {
        self.canvas.contains(p) && self.mask[[p.y() as usize, p.x() as usize]]
    }

    /// Whether the outline of `polygon` shares a pixel with this mask.
    /// Equivalent to rendering `polygon` on a canvas of its own and intersecting both masks,
    /// without allocating the second canvas.
    pub fn intersects_outline(&self, polygon: &Polygon) -> bool {
        outline_pixels(polygon).any(|p| self.is_set(p))
    }
}

/// All pixels on the closed outline of `polygon`, edge by edge.
/// Vertices shared by consecutive edges are yielded more than once.
pub fn outline_pixels(polygon: &Polygon) -> impl Iterator<Item = Point> + '_ {
    polygon
        .edge_iter()
        .flat_map(|(start, end)| LinePixels::new(start, end))
}

/// Bresenham walk from `start` to `end`, both endpoints included.
/// <https://en.wikipedia.org/wiki/Bresenham%27s_line_algorithm#All_cases>
#[derive(Clone, Debug)]
pub struct LinePixels {
    current: Point,
    end: Point,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl LinePixels {
    pub fn new(start: Point, end: Point) -> Self {
        let dx = (end.x() - start.x()).abs();
        let dy = -(end.y() - start.y()).abs();
        LinePixels {
            current: start,
            end,
            dx,
            dy,
            sx: if start.x() < end.x() { 1 } else { -1 },
            sy: if start.y() < end.y() { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePixels {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let p = self.current;
        if p == self.end {
            self.done = true;
        } else {
            let e2 = 2 * self.err;
            if e2 >= self.dy {
                self.err += self.dy;
                self.current.0 += self.sx;
            }
            if e2 <= self.dx {
                self.err += self.dx;
                self.current.1 += self.sy;
            }
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn n_set(mask: &OutlineMask) -> usize {
        mask.mask.iter().filter(|&&b| b).count()
    }

    fn masks_intersect(a: &OutlineMask, b: &OutlineMask) -> bool {
        a.mask.iter().zip(b.mask.iter()).any(|(&a, &b)| a && b)
    }

    #[test]
    fn horizontal_line() {
        let pixels = LinePixels::new(Point(2, 3), Point(6, 3)).collect_vec();
        assert_eq!(pixels.len(), 5);
        assert!(pixels.iter().all(|p| p.y() == 3));
        assert_eq!(pixels.last(), Some(&Point(6, 3)));
    }

    #[test]
    fn diagonal_line_is_8_connected() {
        let pixels = LinePixels::new(Point(5, 5), Point(0, 0)).collect_vec();
        assert_eq!(pixels.len(), 6);
        for (a, b) in pixels.iter().tuple_windows() {
            assert!((a.x() - b.x()).abs() <= 1 && (a.y() - b.y()).abs() <= 1);
        }
    }

    #[test]
    fn single_pixel_line() {
        let pixels = LinePixels::new(Point(4, 4), Point(4, 4)).collect_vec();
        assert_eq!(pixels, vec![Point(4, 4)]);
    }

    #[test]
    fn square_outline_is_clipped() {
        let square = Polygon::try_from(vec![(-5, -5), (-5, 5), (5, 5), (5, -5)]).unwrap();
        let mask = OutlineMask::render(&square, CanvasSize::new(20, 20));
        //only the parts of the right and bottom edges with non-negative coordinates remain
        assert_eq!(n_set(&mask), 11);
        assert!(mask.is_set(Point(5, 0)));
        assert!(mask.is_set(Point(0, 5)));
        assert!(!mask.is_set(Point(2, 2)));
    }

    #[test]
    fn outline_walk_matches_mask_intersection() {
        let canvas = CanvasSize::new(50, 50);
        let a = Polygon::try_from(vec![(10, 0), (10, 40), (20, 40), (20, 0)]).unwrap();
        let b = Polygon::try_from(vec![(0, 20), (0, 30), (45, 30), (45, 20)]).unwrap();
        let c = Polygon::try_from(vec![(30, 35), (30, 45), (40, 45)]).unwrap();

        let (ma, mb, mc) = (
            OutlineMask::render(&a, canvas),
            OutlineMask::render(&b, canvas),
            OutlineMask::render(&c, canvas),
        );
        assert!(masks_intersect(&ma, &mb));
        assert!(ma.intersects_outline(&b));
        assert!(!masks_intersect(&ma, &mc));
        assert!(!ma.intersects_outline(&c));
        assert_eq!(masks_intersect(&mb, &mc), mb.intersects_outline(&c));
    }
}
