use serde::{Deserialize, Serialize};

/// External representation of an [`Instance`](crate::entities::Instance):
/// all contours detected in an image, figure and objects not yet separated.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// Name of the instance, usually the stem of the source image
    pub name: String,
    /// Dimensions of the source image
    pub image: ExtImage,
    /// Detected contours, in extraction order
    pub contours: Vec<ExtContour>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtImage {
    pub width: u32,
    pub height: u32,
}

/// External representation of a [`Polygon`](crate::geometry::primitives::Polygon):
/// an ordered, implicitly closed list of pixel coordinates.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtContour(pub Vec<(i32, i32)>);

/// Whether the objects could be placed
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtVerdict {
    Placed,
    NotPlaced,
}

/// External representation of a [`PlacedObject`](crate::entities::PlacedObject).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    /// Index of the object among the contours that remain after removing the figure
    pub object_index: usize,
    /// Translation applied to the original contour
    pub translation: (i32, i32),
    /// The translated contour
    pub contour: ExtContour,
}

/// External representation of the outcome of a run.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub verdict: ExtVerdict,
    /// The contour classified as figure
    pub figure: ExtContour,
    /// The contours classified as objects, in their original positions
    pub objects: Vec<ExtContour>,
    /// Accepted placements, in the order they were found
    pub placements: Vec<ExtPlacement>,
    /// Indices of objects for which no position was found (only reported when objects are checked individually)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub infeasible: Vec<usize>,
    pub run_time_ms: u64,
}
