use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::geometry::Translation;
use crate::geometry::geo_traits::{CollidesWith, Transformable};

/// Geometric primitive representing a point in pixel space (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point(pub i32, pub i32);

impl Point {
    pub fn x(&self) -> i32 {
        self.0
    }

    pub fn y(&self) -> i32 {
        self.1
    }
}

impl Transformable for Point {
    fn translate(&mut self, t: Translation) -> &mut Self {
        self.0 += t.0;
        self.1 += t.1;
        self
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.0, p.1)
    }
}

impl From<(i32, i32)> for Point {
    fn from(p: (i32, i32)) -> Self {
        Point(p.0, p.1)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl<T> CollidesWith<T> for Point
where
    T: CollidesWith<Point>,
{
    fn collides_with(&self, other: &T) -> bool {
        other.collides_with(self)
    }
}
