/// Fast rejection based on extreme points
pub mod bounding_guard;

mod overlap_detector;
/// Rendering polygon outlines on binary canvases
pub mod raster;

#[doc(inline)]
pub use overlap_detector::DetectorStats;
#[doc(inline)]
pub use overlap_detector::OverlapDetector;
