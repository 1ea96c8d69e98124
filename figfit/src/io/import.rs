use log::{debug, info};

use crate::PlacerError;
use crate::collision_detection::raster::CanvasSize;
use crate::entities::{DEFAULT_MAX_FIGURE_VERTICES, FigureClassifier, Instance};
use crate::geometry::primitives::Polygon;
use crate::io::ext_repr::{ExtContour, ExtImage, ExtInstance};

/// Converts external representations into validated internal ones.
#[derive(Clone, Debug, Copy)]
pub struct Importer {
    /// Figures with more vertices than this are rejected
    pub max_figure_vertices: usize,
}

impl Importer {
    pub fn new(max_figure_vertices: usize) -> Importer {
        Importer {
            max_figure_vertices,
        }
    }

    /// Converts all contours, separates the figure from the objects using `classifier`
    /// and validates the result.
    ///
    /// Every vertex must lie within `0..=width` and `0..=height` of the source image.
    pub fn import_instance(
        &self,
        ext_instance: &ExtInstance,
        classifier: &impl FigureClassifier,
    ) -> Result<Instance, PlacerError> {
        let contours = ext_instance
            .contours
            .iter()
            .enumerate()
            .map(|(i, c)| {
                check_within_image(i, c, ext_instance.image)?;
                import_contour(c)
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "[IMPORT] {}: {} contours with {} vertices in total",
            ext_instance.name,
            contours.len(),
            contours.iter().map(|c| c.n_points()).sum::<usize>()
        );

        let classification = classifier.classify(contours)?;

        info!(
            "[IMPORT] {}: figure with {} vertices, {} object(s)",
            ext_instance.name,
            classification.figure.n_points(),
            classification.objects.len()
        );

        let canvas = CanvasSize::new(ext_instance.image.width, ext_instance.image.height);
        Instance::from_classification(
            ext_instance.name.clone(),
            classification,
            canvas,
            self.max_figure_vertices,
        )
    }
}

impl Default for Importer {
    fn default() -> Self {
        Importer::new(DEFAULT_MAX_FIGURE_VERTICES)
    }
}

pub fn import_contour(ext_contour: &ExtContour) -> Result<Polygon, PlacerError> {
    Polygon::try_from(ext_contour.0.clone())
}

fn check_within_image(
    contour_index: usize,
    ext_contour: &ExtContour,
    image: ExtImage,
) -> Result<(), PlacerError> {
    let outside = |&&(x, y): &&(i32, i32)| {
        x < 0
            || y < 0
            || i64::from(x) > i64::from(image.width)
            || i64::from(y) > i64::from(image.height)
    };
    match ext_contour.0.iter().find(outside) {
        Some(&(x, y)) => Err(PlacerError::ContourOutOfImage {
            contour_index,
            x,
            y,
            width: image.width,
            height: image.height,
        }),
        None => Ok(()),
    }
}
