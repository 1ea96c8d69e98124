use crate::geometry::Translation;
use crate::geometry::primitives::Polygon;

/// An object of the instance moved to its accepted position inside the figure
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedObject {
    /// Index of the object in [`Instance::objects`](crate::entities::Instance::objects)
    pub object_index: usize,
    /// Total translation applied to the original contour
    pub translation: Translation,
    /// The translated contour
    pub shape: Polygon,
}

/// Outcome of searching a position for a single object
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementResult {
    Infeasible,
    Feasible(PlacedObject),
}

impl PlacementResult {
    pub fn is_feasible(&self) -> bool {
        matches!(self, PlacementResult::Feasible(_))
    }

    pub fn placed(self) -> Option<PlacedObject> {
        match self {
            PlacementResult::Feasible(po) => Some(po),
            PlacementResult::Infeasible => None,
        }
    }
}

impl From<Option<PlacedObject>> for PlacementResult {
    fn from(po: Option<PlacedObject>) -> Self {
        match po {
            Some(po) => PlacementResult::Feasible(po),
            None => PlacementResult::Infeasible,
        }
    }
}

/// Outcome of packing the whole object set
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PackingResult {
    /// Every object was placed, listed in the order they were placed
    AllPlaced(Vec<PlacedObject>),
    NotAllPlaced,
}

impl PackingResult {
    pub fn all_placed(&self) -> bool {
        matches!(self, PackingResult::AllPlaced(_))
    }

    pub fn placements(&self) -> &[PlacedObject] {
        match self {
            PackingResult::AllPlaced(placements) => placements,
            PackingResult::NotAllPlaced => &[],
        }
    }
}
