use log::{debug, trace, warn};

use figfit::collision_detection::OverlapDetector;
use figfit::collision_detection::bounding_guard;
use figfit::entities::{PlacedObject, PlacementResult};
use figfit::geometry::Translation;
use figfit::geometry::geo_traits::{Transformable, TransformableFrom};
use figfit::geometry::primitives::Polygon;

use crate::opt::{SearchPolicy, SearchStats};

/// Searches the first integer translation of `object` which the detector accepts.
///
/// The object is first aligned with the top-left corner of the figure's extents
/// (top vertices at the same y, left vertices at the same x). From there, offsets are scanned
/// row by row: x advances one pixel at a time while the object's right vertex is left of the
/// figure's right vertex, after which x resets and y advances one pixel, while the object's bottom
/// vertex is above the figure's bottom vertex. Offsets where the object's right (bottom) vertex
/// reaches the figure's right (bottom) vertex are not evaluated.
///
/// If the object is wider or taller than the figure, no offset is evaluated at all.
/// `object` itself is never modified, candidates are written to a search-local buffer.
pub fn find_translation(
    detector: &OverlapDetector,
    object: &Polygon,
    object_index: usize,
    policy: &SearchPolicy,
    stats: &mut SearchStats,
) -> PlacementResult {
    stats.n_searches += 1;
    let fig = detector.figure().extremes();
    let obj = object.extremes();

    if !bounding_guard::fits_within(fig, obj) {
        stats.n_guard_rejections += 1;
        debug!(
            "[TS] object {object_index} ({}x{}) exceeds the figure ({}x{}), skipping search",
            obj.width(),
            obj.height(),
            fig.width(),
            fig.height()
        );
        return PlacementResult::Infeasible;
    }

    let alignment = Translation(fig.left.x() - obj.left.x(), fig.top.y() - obj.top.y());
    let aligned = obj.translate_clone(alignment);

    let n_rows = fig.bottom.y() - aligned.bottom.y();
    let n_cols = fig.right.x() - aligned.right.x();

    let mut buffer = object.clone();
    let mut n_offsets = 0;

    for dy in 0..n_rows {
        for dx in 0..n_cols {
            if policy
                .max_offsets_per_object
                .is_some_and(|max| n_offsets >= max)
            {
                warn!(
                    "[TS] object {object_index}: offset limit of {n_offsets} reached, giving up"
                );
                return PlacementResult::Infeasible;
            }
            n_offsets += 1;

            let translation = alignment + Translation(dx, dy);
            buffer.translate_from(object, translation);

            if detector.is_safe(&buffer, &mut stats.detector) {
                debug!(
                    "[TS] object {object_index} fits at {translation} after {n_offsets} offsets"
                );
                return PlacementResult::Feasible(PlacedObject {
                    object_index,
                    translation,
                    shape: buffer,
                });
            }
        }
        trace!("[TS] object {object_index}: row {dy}/{n_rows} exhausted");
    }

    debug!("[TS] object {object_index} does not fit ({n_offsets} offsets evaluated)");
    PlacementResult::Infeasible
}
