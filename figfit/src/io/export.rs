use std::time::Instant;

use itertools::Itertools;

use crate::entities::{Instance, PackingResult, PlacedObject, PlacementResult};
use crate::geometry::primitives::Polygon;
use crate::io::ext_repr::{ExtContour, ExtPlacement, ExtSolution, ExtVerdict};

/// Exports the outcome of packing all objects jointly.
pub fn export_packing(instance: &Instance, result: &PackingResult, epoch: Instant) -> ExtSolution {
    let verdict = match result {
        PackingResult::AllPlaced(_) => ExtVerdict::Placed,
        PackingResult::NotAllPlaced => ExtVerdict::NotPlaced,
    };
    ExtSolution {
        verdict,
        figure: export_contour(instance.figure()),
        objects: instance.objects().iter().map(export_contour).collect(),
        placements: result.placements().iter().map(export_placement).collect(),
        infeasible: vec![],
        run_time_ms: epoch.elapsed().as_millis() as u64,
    }
}

/// Exports the outcome of checking every object on its own.
/// The verdict is [`ExtVerdict::Placed`] only if every object fits individually.
pub fn export_individual(
    instance: &Instance,
    results: &[PlacementResult],
    epoch: Instant,
) -> ExtSolution {
    let placements = results
        .iter()
        .filter_map(|r| match r {
            PlacementResult::Feasible(po) => Some(export_placement(po)),
            PlacementResult::Infeasible => None,
        })
        .collect_vec();
    let infeasible = results
        .iter()
        .positions(|r| !r.is_feasible())
        .collect_vec();
    let verdict = match infeasible.is_empty() {
        true => ExtVerdict::Placed,
        false => ExtVerdict::NotPlaced,
    };

    ExtSolution {
        verdict,
        figure: export_contour(instance.figure()),
        objects: instance.objects().iter().map(export_contour).collect(),
        placements,
        infeasible,
        run_time_ms: epoch.elapsed().as_millis() as u64,
    }
}

pub fn export_placement(po: &PlacedObject) -> ExtPlacement {
    ExtPlacement {
        object_index: po.object_index,
        translation: po.translation.into(),
        contour: export_contour(&po.shape),
    }
}

pub fn export_contour(polygon: &Polygon) -> ExtContour {
    ExtContour(polygon.points().iter().map(|p| (*p).into()).collect())
}
