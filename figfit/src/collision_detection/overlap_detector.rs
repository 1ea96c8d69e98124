use serde::{Deserialize, Serialize};

use crate::collision_detection::raster::{CanvasSize, OutlineMask};
use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Point, Polygon, Rect};

/// Decides whether a candidate placement is safe: inside the figure and clear of every placed object.
///
/// Two gates are evaluated in order:
/// 1. *Containment*: every vertex of the candidate must lie inside the figure, no vertex of the
///    candidate may lie inside a placed object and no vertex of a placed object may lie inside the candidate.
/// 2. *Raster confirmation*: only if the first gate passed, the outline of the candidate is compared
///    with the outline of every placed object on a binary canvas the size of the source image.
///    Any shared pixel vetoes the placement.
///
/// The first gate samples vertices only: edges that cross without either polygon having a vertex inside
/// the other escape it. Such crossings leave shared outline pixels and are caught by the second gate.
///
/// Placed objects whose bounding box is disjoint from the candidate's are skipped by both gates,
/// neither gate can flag them.
#[derive(Debug)]
pub struct OverlapDetector<'a> {
    figure: &'a Polygon,
    placed: Vec<PlacedOutline<'a>>,
}

/// A placed object together with its outline rendered on its own canvas layer
#[derive(Debug)]
struct PlacedOutline<'a> {
    shape: &'a Polygon,
    mask: OutlineMask,
}

impl<'a> OverlapDetector<'a> {
    /// Renders the outline of every placed object once, they are reused for all subsequent queries.
    pub fn new(
        figure: &'a Polygon,
        placed: impl IntoIterator<Item = &'a Polygon>,
        canvas: CanvasSize,
    ) -> Self {
        let placed = placed
            .into_iter()
            .map(|shape| PlacedOutline {
                shape,
                mask: OutlineMask::render(shape, canvas),
            })
            .collect();

        Self { figure, placed }
    }

    pub fn figure(&self) -> &Polygon {
        self.figure
    }

    /// Returns `true` if `candidate` can be placed as is.
    pub fn is_safe(&self, candidate: &Polygon, stats: &mut DetectorStats) -> bool {
        stats.n_evaluations += 1;

        //containment in the figure
        if !candidate
            .points()
            .iter()
            .all(|p| point_query(self.figure, p, stats))
        {
            return false;
        }

        let c_bbox = candidate.bbox();

        //vertex containment in both directions
        for po in self.nearby(c_bbox) {
            let overlap = candidate
                .points()
                .iter()
                .any(|p| point_query(po.shape, p, stats))
                || po
                    .shape
                    .points()
                    .iter()
                    .any(|p| point_query(candidate, p, stats));
            if overlap {
                return false;
            }
        }

        //raster confirmation
        for po in self.nearby(c_bbox) {
            stats.n_raster_checks += 1;
            if po.mask.intersects_outline(candidate) {
                stats.n_raster_vetoes += 1;
                return false;
            }
        }

        true
    }

    fn nearby(&self, bbox: Rect) -> impl Iterator<Item = &PlacedOutline<'a>> + '_ {
        self.placed
            .iter()
            .filter(move |po| po.shape.bbox().collides_with(&bbox))
    }
}

fn point_query(polygon: &Polygon, p: &Point, stats: &mut DetectorStats) -> bool {
    stats.n_point_queries += 1;
    polygon.collides_with(p)
}

/// Counters collected by an [`OverlapDetector`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorStats {
    /// Number of candidates evaluated
    pub n_evaluations: usize,
    /// Number of point-in-polygon queries performed
    pub n_point_queries: usize,
    /// Number of candidate/placed pairs compared on the raster canvas
    pub n_raster_checks: usize,
    /// Number of candidates rejected by the raster confirmation only
    pub n_raster_vetoes: usize,
}
