use crate::PlacerError;
use crate::collision_detection::raster::CanvasSize;
use crate::entities::Classification;
use crate::geometry::primitives::Polygon;

/// Upper bound on the number of vertices of a well-formed figure
pub const DEFAULT_MAX_FIGURE_VERTICES: usize = 6;

/// A validated packing problem: one figure, a non-empty set of objects and the size of the image
/// they were extracted from.
#[derive(Clone, Debug)]
pub struct Instance {
    name: String,
    figure: Polygon,
    objects: Vec<Polygon>,
    canvas: CanvasSize,
}

impl Instance {
    /// Checks the figure's vertex count first and the presence of objects second.
    pub fn new(
        name: impl Into<String>,
        figure: Polygon,
        objects: Vec<Polygon>,
        canvas: CanvasSize,
        max_figure_vertices: usize,
    ) -> Result<Self, PlacerError> {
        if figure.n_points() > max_figure_vertices {
            return Err(PlacerError::InvalidFigureShape {
                n_vertices: figure.n_points(),
                max: max_figure_vertices,
            });
        }
        if objects.is_empty() {
            return Err(PlacerError::NoObjectsDetected);
        }
        Ok(Instance {
            name: name.into(),
            figure,
            objects,
            canvas,
        })
    }

    pub fn from_classification(
        name: impl Into<String>,
        classification: Classification,
        canvas: CanvasSize,
        max_figure_vertices: usize,
    ) -> Result<Self, PlacerError> {
        let Classification { figure, objects } = classification;
        Instance::new(name, figure, objects, canvas, max_figure_vertices)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn figure(&self) -> &Polygon {
        &self.figure
    }

    pub fn objects(&self) -> &[Polygon] {
        &self.objects
    }

    pub fn object(&self, index: usize) -> &Polygon {
        &self.objects[index]
    }

    pub fn n_objects(&self) -> usize {
        self.objects.len()
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }
}
