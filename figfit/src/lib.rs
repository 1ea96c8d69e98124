//! Geometry and overlap detection for packing rigid polygonal objects into a container figure
//! using integer translations only.

/// Overlap detection between a candidate placement, the figure and already placed objects
pub mod collision_detection;

/// Entities modelling a packing run: instances, placed objects and results
pub mod entities;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing instances into and exporting results out of this library
pub mod io;

mod error;

#[doc(inline)]
pub use error::PlacerError;
