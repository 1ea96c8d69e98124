use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::entities::{Instance, PlacedObject};
use crate::geometry::geo_traits::Shape;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Draws the figure, the objects where they were detected and the accepted placements
/// on a canvas with the dimensions of the source image.
pub fn annotation_to_svg(
    instance: &Instance,
    placements: &[PlacedObject],
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let canvas = instance.canvas();
    let (width, height) = (canvas.width as f32, canvas.height as f32);
    let theme = &options.theme;

    let stroke_width = f32::min(width, height) * 0.001 * theme.stroke_width_multiplier;

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", format!("{}", theme.background_fill));

    let figure_group = {
        let figure = instance.figure();
        let bbox = figure.bbox();
        let title = Title::new(format!(
            "figure, {} vertices, bbox: [x_min: {}, y_min: {}, x_max: {}, y_max: {}]",
            figure.n_points(),
            bbox.x_min,
            bbox.y_min,
            bbox.x_max,
            bbox.y_max
        ));
        Group::new()
            .set("id", "figure")
            .add(svg_util::data_to_path(
                svg_util::polygon_data(figure),
                &[
                    ("fill", &*format!("{}", theme.figure_fill)),
                    ("stroke", &*format!("{}", theme.figure_stroke)),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            ))
            .add(title)
    };

    let source_group = {
        let mut group = Group::new().set("id", "source_objects");
        if options.source_objects {
            for (i, object) in instance.objects().iter().enumerate() {
                group = group.add(
                    Group::new()
                        .add(svg_util::data_to_path(
                            svg_util::polygon_data(object),
                            &[
                                ("fill", "none"),
                                ("stroke", &*format!("{}", theme.source_object_stroke)),
                                ("stroke-width", &*format!("{}", stroke_width)),
                                (
                                    "stroke-dasharray",
                                    &*format!("{} {}", 4.0 * stroke_width, 2.0 * stroke_width),
                                ),
                            ],
                        ))
                        .add(Title::new(format!("object {i}, {} vertices", object.n_points()))),
                );
            }
        }
        group
    };

    let placement_group = {
        let mut group = Group::new().set("id", "placements");
        for po in placements {
            group = group.add(
                Group::new()
                    .add(svg_util::data_to_path(
                        svg_util::polygon_data(&po.shape),
                        &[
                            ("fill", &*format!("{}", theme.placement_fill)),
                            ("fill-opacity", &*format!("{}", theme.placement_fill_opac)),
                            ("stroke", &*format!("{}", theme.placement_stroke)),
                            ("stroke-width", &*format!("{}", stroke_width)),
                        ],
                    ))
                    .add(Title::new(format!(
                        "object {} placed at {}",
                        po.object_index, po.translation
                    ))),
            );
        }
        group
    };

    let mut document = Document::new()
        .set("viewBox", (0f32, 0f32, width, height))
        .add(background)
        .add(figure_group)
        .add(source_group)
        .add(placement_group);

    if options.label {
        let font_size = f32::min(width, height) * 0.025;
        let label = Text::new(format!(
            "{} | objects: {} | placed: {} | {}",
            instance.name(),
            instance.n_objects(),
            placements.len(),
            title
        ))
        .set("x", font_size)
        .set("y", 1.5 * font_size)
        .set("font-size", font_size)
        .set("font-family", "monospace")
        .set("font-weight", "500");
        document = document.add(label);
    }

    document
}
