use crate::geometry::Translation;
use crate::geometry::primitives::Rect;

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can be moved by a [`Translation`].
pub trait Transformable: Clone {
    /// Applies a translation to `self`.
    fn translate(&mut self, t: Translation) -> &mut Self;

    /// Applies a translation to a clone, leaving `self` untouched.
    fn translate_clone(&self, t: Translation) -> Self {
        let mut clone = self.clone();
        clone.translate(t);
        clone
    }
}

/// Trait for types that can be overwritten with a translated version of a reference object.
///
/// Useful when repeatedly translating a single shape without having to reallocate new memory each time.
/// The reference is never modified.
pub trait TransformableFrom: Transformable {
    /// Applies a translation on the reference object and stores the result in `self`.
    fn translate_from(&mut self, reference: &Self, t: Translation) -> &mut Self;
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Axis-aligned bounding box of the shape, inclusive on all sides
    fn bbox(&self) -> Rect;
}
