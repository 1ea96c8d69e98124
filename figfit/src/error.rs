use std::path::PathBuf;

/// Conditions under which a run produces no verdict at all.
///
/// These are distinct from a geometric "does not fit", which is a valid answer
/// ([`PackingResult::NotAllPlaced`](crate::entities::PackingResult::NotAllPlaced)).
#[derive(Debug, thiserror::Error)]
pub enum PlacerError {
    #[error("input not found: {0}")]
    InputNotFound(PathBuf),
    #[error("unable to read input {path}: {reason}")]
    UnreadableInput { path: PathBuf, reason: String },
    #[error("figure has {n_vertices} vertices, at most {max} are allowed")]
    InvalidFigureShape { n_vertices: usize, max: usize },
    #[error("no objects detected besides the figure")]
    NoObjectsDetected,
    #[error("no contours detected")]
    NoContoursDetected,
    #[error("contour {contour_index} has vertex ({x}, {y}) outside the {width}x{height} image")]
    ContourOutOfImage {
        contour_index: usize,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
    #[error("polygon needs at least 3 points, got {n_points}")]
    DegeneratePolygon { n_points: usize },
}
