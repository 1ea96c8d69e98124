use std::time::Instant;

use itertools::Itertools;
use log::{debug, info, warn};
use thousands::Separable;

use figfit::collision_detection::OverlapDetector;
use figfit::entities::{Instance, PackingResult, PlacedObject, PlacementResult};

use crate::opt::translation_search::find_translation;
use crate::opt::{SearchPolicy, SearchStats};

/// Exhaustive Translation Search over all orderings of the objects of an instance.
pub struct ETSOptimizer {
    pub instance: Instance,
    pub policy: SearchPolicy,
    pub stats: SearchStats,
}

impl ETSOptimizer {
    pub fn new(instance: Instance, policy: SearchPolicy) -> Self {
        Self {
            instance,
            policy,
            stats: SearchStats::default(),
        }
    }

    /// Tries the orderings of the objects in lexicographic order. Every ordering starts from an
    /// empty figure and places the objects one by one, each against those placed before it.
    /// The first ordering in which every object fits is returned.
    pub fn solve(&mut self) -> PackingResult {
        let start = Instant::now();
        let n = self.instance.n_objects();

        let mut result = PackingResult::NotAllPlaced;
        for (i, ordering) in (0..n).permutations(n).enumerate() {
            if self.policy.max_permutations.is_some_and(|max| i >= max) {
                warn!("[ETS] permutation limit of {i} reached, stopping search");
                break;
            }
            self.stats.n_permutations_tried += 1;

            match place_in_order(&self.instance, &ordering, &self.policy, &mut self.stats) {
                Some(placements) => {
                    info!("[ETS] all {n} objects placed using ordering {ordering:?}");
                    result = PackingResult::AllPlaced(placements);
                    break;
                }
                None => debug!("[ETS] ordering {ordering:?} failed"),
            }
        }

        if !result.all_placed() {
            info!(
                "[ETS] no ordering places all {n} objects ({} tried)",
                self.stats.n_permutations_tried
            );
        }
        info!(
            "[ETS] search finished in {:.3}ms ({} offsets, {} point queries)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.stats.n_offsets_evaluated().separate_with_commas(),
            self.stats.detector.n_point_queries.separate_with_commas()
        );
        result
    }

    /// Checks every object on its own against the empty figure.
    /// Results are in the order of the instance's objects.
    pub fn solve_individually(&mut self) -> Vec<PlacementResult> {
        let detector = OverlapDetector::new(
            self.instance.figure(),
            std::iter::empty(),
            self.instance.canvas(),
        );

        self.instance
            .objects()
            .iter()
            .enumerate()
            .map(|(i, object)| {
                let result = find_translation(&detector, object, i, &self.policy, &mut self.stats);
                info!("[ETS] object {i} fits on its own: {}", result.is_feasible());
                result
            })
            .collect()
    }
}

/// Places the objects in the given order, each one against all objects placed before it.
/// Returns `None` as soon as one object does not fit.
///
/// The accumulator is owned by this call: nothing placed during a failed attempt survives it.
pub fn place_in_order(
    instance: &Instance,
    ordering: &[usize],
    policy: &SearchPolicy,
    stats: &mut SearchStats,
) -> Option<Vec<PlacedObject>> {
    let mut placed: Vec<PlacedObject> = Vec::with_capacity(ordering.len());

    for &object_index in ordering {
        let result = {
            let detector = OverlapDetector::new(
                instance.figure(),
                placed.iter().map(|po| &po.shape),
                instance.canvas(),
            );
            find_translation(
                &detector,
                instance.object(object_index),
                object_index,
                policy,
                stats,
            )
        };
        match result {
            PlacementResult::Feasible(po) => placed.push(po),
            PlacementResult::Infeasible => return None,
        }
    }
    Some(placed)
}
