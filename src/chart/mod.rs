//! Radar chart model and rendering backends.
//!
//! [`RadarChart`] holds the polar geometry only; the [`ChartRenderer`]
//! implementations turn it into PNG or SVG bytes.

mod font;
pub mod raster;
pub mod svg;

use crate::error::{Result, SurveyError};
use crate::types::config::{ChartFormat, ChartSettings};
use std::f64::consts::PI;

/// Radial gridline values.
pub const GRIDLINES: [f64; 3] = [1.0, 2.0, 3.0];
/// Outward offset of vertex annotations, in rating units.
pub const ANNOTATION_OFFSET: f64 = 0.1;
/// Headroom above the largest plotted value.
const RADIAL_HEADROOM: f64 = 0.4;
/// Share of the canvas edge used by the plot radius; the rest holds labels.
const PLOT_RADIUS: f64 = 0.36;
/// Radial gridline labels sit on this angle.
const RADIAL_LABEL_ANGLE: f64 = PI / 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub angle: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub angle: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub angle: f64,
    pub radius: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    pub title: Option<String>,
    /// Plotted points; the last repeats the first to close the polygon.
    pub vertices: Vec<Vertex>,
    pub ticks: Vec<Tick>,
    pub gridlines: Vec<f64>,
    pub annotations: Vec<Annotation>,
    pub radial_min: f64,
    pub radial_max: f64,
}

impl RadarChart {
    pub fn build(ratings: &[i64], labels: &[String]) -> Result<Self> {
        if ratings.len() != labels.len() {
            return Err(SurveyError::InputMismatch {
                ratings: ratings.len(),
                labels: labels.len(),
            });
        }
        if ratings.is_empty() {
            return Err(SurveyError::EmptyInput);
        }

        let step = 2.0 * PI / ratings.len() as f64;
        let mut vertices = ratings
            .iter()
            .enumerate()
            .map(|(index, rating)| Vertex {
                angle: step * index as f64,
                value: *rating as f64,
            })
            .collect::<Vec<_>>();
        vertices.push(vertices[0].clone());

        let ticks = labels
            .iter()
            .enumerate()
            .map(|(index, label)| Tick {
                angle: step * index as f64,
                label: label.clone(),
            })
            .collect();

        let annotations = vertices[..ratings.len()]
            .iter()
            .map(|vertex| Annotation {
                angle: vertex.angle,
                radius: vertex.value + ANNOTATION_OFFSET,
                text: format!("{:.0}", vertex.value),
            })
            .collect();

        let largest = ratings.iter().copied().max().unwrap_or(0) as f64;
        let smallest = ratings.iter().copied().min().unwrap_or(0) as f64;
        let top = GRIDLINES[GRIDLINES.len() - 1].max(largest);

        Ok(Self {
            title: None,
            vertices,
            ticks,
            gridlines: GRIDLINES.to_vec(),
            annotations,
            radial_min: smallest.min(0.0),
            radial_max: top + RADIAL_HEADROOM,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Maps a polar point to the unit disk, theta 0 east and counter-clockwise,
    /// y pointing up.
    pub fn to_unit(&self, angle: f64, value: f64) -> (f64, f64) {
        let fraction = self.radius_fraction(value);
        (fraction * angle.cos(), fraction * angle.sin())
    }

    pub fn radius_fraction(&self, value: f64) -> f64 {
        let span = self.radial_max - self.radial_min;
        if span <= 0.0 {
            return 0.0;
        }
        (value - self.radial_min) / span
    }
}

/// Drawing backend for a [`RadarChart`].
pub trait ChartRenderer {
    fn format(&self) -> ChartFormat;
    fn render(&self, chart: &RadarChart) -> Result<Vec<u8>>;
}

pub fn renderer_for(settings: &ChartSettings) -> Box<dyn ChartRenderer> {
    match settings.format {
        ChartFormat::Png => Box::new(raster::PngRenderer::new(*settings)),
        ChartFormat::Svg => Box::new(svg::SvgRenderer::new(*settings)),
    }
}

/// Download name used for a category chart, e.g. `radar_chart_SDG 7.png`.
pub fn chart_file_name(category: &str, format: ChartFormat) -> String {
    format!("radar_chart_{category}.{}", format.extension())
}
