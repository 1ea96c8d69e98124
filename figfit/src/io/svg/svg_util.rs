use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Path;
use svg::node::element::path::Data;

use crate::geometry::primitives::Polygon;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgTheme,
    ///Draw the objects at the position they were detected
    #[serde(default = "default_true")]
    pub source_objects: bool,
    ///Draw the label with the verdict above the figure
    #[serde(default = "default_true")]
    pub label: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            source_objects: true,
            label: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgTheme {
    pub stroke_width_multiplier: f32,
    pub background_fill: Color,
    pub figure_stroke: Color,
    pub figure_fill: Color,
    pub source_object_stroke: Color,
    pub placement_stroke: Color,
    pub placement_fill: Color,
    pub placement_fill_opac: f32,
}

impl Default for SvgTheme {
    fn default() -> Self {
        SvgTheme::EARTH_TONES
    }
}

impl SvgTheme {
    pub const EARTH_TONES: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.0,
        background_fill: Color(0xFF, 0xFF, 0xFF),
        figure_stroke: Color(0x5A, 0x30, 0x10),
        figure_fill: Color(0xCC, 0x82, 0x4A),
        source_object_stroke: Color(0x2D, 0x2D, 0x2D),
        placement_stroke: Color(0x00, 0x00, 0x00),
        placement_fill: Color(0xFF, 0xC8, 0x79),
        placement_fill_opac: 0.8,
    };

    pub const GRAY: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.5,
        background_fill: Color(0xFF, 0xFF, 0xFF),
        figure_stroke: Color(0x00, 0x00, 0x00),
        figure_fill: Color(0xD3, 0xD3, 0xD3),
        source_object_stroke: Color(0x63, 0x63, 0x63),
        placement_stroke: Color(0x00, 0x00, 0x00),
        placement_fill: Color(0x7A, 0x7A, 0x7A),
        placement_fill_opac: 0.9,
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        let channel = |i: usize| u8::from_str_radix(s.get(i..i + 2).unwrap_or(""), 16);
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid color {s}: {e}")))
    }
}

pub fn polygon_data(polygon: &Polygon) -> Data {
    let (first, rest) = polygon
        .points()
        .split_first()
        .expect("polygon has at least 3 points");
    let mut data = Data::new().move_to((first.x() as f32, first.y() as f32));
    for p in rest {
        data = data.line_to((p.x() as f32, p.y() as f32));
    }
    data.close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
