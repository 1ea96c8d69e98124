use serde::{Deserialize, Serialize};

use figfit::entities::DEFAULT_MAX_FIGURE_VERTICES;
use figfit::io::svg::SvgDrawOptions;

use crate::opt::SearchPolicy;

/// Configuration for the Exhaustive Translation Search
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ETSConfig {
    /// Figures with more vertices than this are rejected without searching
    #[serde(default = "default_max_figure_vertices")]
    pub max_figure_vertices: usize,
    /// Whether the objects are packed together or each checked on its own
    #[serde(default)]
    pub mode: PlacementMode,
    /// Optional limits on the search, unbounded by default
    #[serde(default)]
    pub search_policy: SearchPolicy,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_max_figure_vertices() -> usize {
    DEFAULT_MAX_FIGURE_VERTICES
}

impl Default for ETSConfig {
    fn default() -> Self {
        Self {
            max_figure_vertices: DEFAULT_MAX_FIGURE_VERTICES,
            mode: PlacementMode::default(),
            search_policy: SearchPolicy::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// Place all objects together, trying every ordering of the objects
    #[default]
    Joint,
    /// Check every object against the empty figure
    Individual,
}
