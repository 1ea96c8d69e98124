mod extreme_points;
pub mod geo_traits;
pub mod primitives;
mod translation;

#[doc(inline)]
pub use extreme_points::ExtremePoints;
#[doc(inline)]
pub use translation::Translation;
