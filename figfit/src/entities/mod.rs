mod classifier;
mod instance;
mod placement;

#[doc(inline)]
pub use classifier::Classification;
#[doc(inline)]
pub use classifier::FigureClassifier;
#[doc(inline)]
pub use classifier::LeftmostPointClassifier;
#[doc(inline)]
pub use instance::DEFAULT_MAX_FIGURE_VERTICES;
#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use placement::PackingResult;
#[doc(inline)]
pub use placement::PlacedObject;
#[doc(inline)]
pub use placement::PlacementResult;
