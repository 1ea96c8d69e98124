use crate::PlacerError;
use crate::geometry::primitives::Polygon;

/// Outcome of separating the figure from the objects in a set of detected contours
#[derive(Clone, Debug)]
pub struct Classification {
    pub figure: Polygon,
    /// Remaining contours, in their original relative order
    pub objects: Vec<Polygon>,
}

/// Strategy to decide which of the detected contours is the figure.
pub trait FigureClassifier {
    fn classify(&self, contours: Vec<Polygon>) -> Result<Classification, PlacerError>;
}

/// The contour owning the globally leftmost vertex is the figure.
///
/// This is a positional assumption on how the scene was photographed: the figure is drawn
/// further left than any object. The running minimum starts at the first vertex of the first
/// contour and only moves on a strictly smaller x, so on a tie the earliest contour wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeftmostPointClassifier;

impl FigureClassifier for LeftmostPointClassifier {
    fn classify(&self, mut contours: Vec<Polygon>) -> Result<Classification, PlacerError> {
        let first = contours.first().ok_or(PlacerError::NoContoursDetected)?;

        let mut figure_idx = 0;
        let mut min_x = first.points()[0].x();

        for (i, contour) in contours.iter().enumerate() {
            for p in contour.points() {
                if p.x() < min_x {
                    figure_idx = i;
                    min_x = p.x();
                }
            }
        }

        let figure = contours.remove(figure_idx);
        Ok(Classification {
            figure,
            objects: contours,
        })
    }
}
