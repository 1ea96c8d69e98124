use std::fmt::Display;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Integer translation vector in pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Translation(pub i32, pub i32);

impl Add for Translation {
    type Output = Translation;

    fn add(self, rhs: Self) -> Self::Output {
        Translation(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl From<(i32, i32)> for Translation {
    fn from((dx, dy): (i32, i32)) -> Self {
        Translation(dx, dy)
    }
}

impl From<Translation> for (i32, i32) {
    fn from(t: Translation) -> Self {
        (t.0, t.1)
    }
}

impl Display for Translation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(dx: {}, dy: {})", self.0, self.1)
    }
}
