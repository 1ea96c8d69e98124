use log::info;
use serde::{Deserialize, Serialize};
use thousands::Separable;

use figfit::PlacerError;
use figfit::collision_detection::DetectorStats;
use figfit::entities::{Instance, LeftmostPointClassifier, PackingResult, PlacedObject, PlacementResult};
use figfit::io::ext_repr::ExtInstance;
use figfit::io::import::Importer;

use crate::config::{ETSConfig, PlacementMode};

/// Packing all objects by trying every ordering
pub mod packing;
/// Searching a position for a single object
pub mod translation_search;

/// Optional limits on the exhaustive search. Without limits (the default) the search runs until it
/// finds a placement or has exhausted every candidate.
/// Offsets are always tried in row-major order and orderings in lexicographic order,
/// so a limit only truncates the search, it never reorders it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Maximum number of offsets evaluated per object per search
    pub max_offsets_per_object: Option<usize>,
    /// Maximum number of orderings tried when packing jointly
    pub max_permutations: Option<usize>,
}

/// Counters collected during a run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Counters of the overlap detector, `n_evaluations` is the number of offsets tried
    pub detector: DetectorStats,
    /// Number of translation searches started
    pub n_searches: usize,
    /// Number of searches rejected by the bounding guard before evaluating any offset
    pub n_guard_rejections: usize,
    /// Number of orderings attempted
    pub n_permutations_tried: usize,
}

impl SearchStats {
    pub fn n_offsets_evaluated(&self) -> usize {
        self.detector.n_evaluations
    }
}

/// Outcome of a run, depending on the configured [`PlacementMode`]
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Joint(PackingResult),
    Individual(Vec<PlacementResult>),
}

impl RunOutcome {
    /// Whether every object found a place
    pub fn all_placed(&self) -> bool {
        match self {
            RunOutcome::Joint(result) => result.all_placed(),
            RunOutcome::Individual(results) => results.iter().all(|r| r.is_feasible()),
        }
    }

    pub fn placements(&self) -> Vec<PlacedObject> {
        match self {
            RunOutcome::Joint(result) => result.placements().to_vec(),
            RunOutcome::Individual(results) => {
                results.iter().cloned().filter_map(|r| r.placed()).collect()
            }
        }
    }
}

/// A completed run over one instance
#[derive(Debug, Clone)]
pub struct ETSRun {
    pub instance: Instance,
    pub outcome: RunOutcome,
    pub stats: SearchStats,
}

/// Imports `ext_instance` and runs the search configured in `config`.
///
/// Returns an error, and therefore no verdict, when the instance does not describe a valid problem.
pub fn run(ext_instance: &ExtInstance, config: &ETSConfig) -> Result<ETSRun, PlacerError> {
    let importer = Importer::new(config.max_figure_vertices);
    let instance = importer.import_instance(ext_instance, &LeftmostPointClassifier)?;

    let mut optimizer = packing::ETSOptimizer::new(instance, config.search_policy);
    let outcome = match config.mode {
        PlacementMode::Joint => RunOutcome::Joint(optimizer.solve()),
        PlacementMode::Individual => RunOutcome::Individual(optimizer.solve_individually()),
    };

    info!(
        "[ETS] {}: all placed: {} ({} offsets evaluated)",
        ext_instance.name,
        outcome.all_placed(),
        optimizer.stats.n_offsets_evaluated().separate_with_commas()
    );

    Ok(ETSRun {
        instance: optimizer.instance,
        outcome,
        stats: optimizer.stats,
    })
}
