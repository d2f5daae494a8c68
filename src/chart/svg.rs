use super::{ChartRenderer, RadarChart, PLOT_RADIUS, RADIAL_LABEL_ANGLE};
use crate::error::Result;
use crate::types::config::{ChartFormat, ChartSettings};

/// Vector backend sharing the raster layout.
pub struct SvgRenderer {
    settings: ChartSettings,
}

impl SvgRenderer {
    pub fn new(settings: ChartSettings) -> Self {
        Self { settings }
    }

    pub fn to_svg(&self, chart: &RadarChart) -> String {
        let size = self.settings.size as f64;
        let (cx, cy) = (size / 2.0, size / 2.0);
        let radius = size * PLOT_RADIUS;
        let font_size = 7.0 * self.settings.font_scale as f64 * 1.4;
        let project = |(ux, uy): (f64, f64)| (cx + ux * radius, cy - uy * radius);
        let [r, g, b] = self.settings.color;
        let color = format!("#{r:02x}{g:02x}{b:02x}");

        let mut elements = Vec::new();
        for value in &chart.gridlines {
            elements.push(format!(
                r##"  <circle cx="{cx:.1}" cy="{cy:.1}" r="{:.1}" fill="none" stroke="#d2d2d2" stroke-width="1"/>"##,
                radius * chart.radius_fraction(*value)
            ));
        }
        for tick in &chart.ticks {
            let (x, y) = project(chart.to_unit(tick.angle, chart.radial_max));
            elements.push(format!(
                r##"  <line x1="{cx:.1}" y1="{cy:.1}" x2="{x:.1}" y2="{y:.1}" stroke="#d2d2d2" stroke-width="1"/>"##
            ));
        }
        elements.push(format!(
            r##"  <circle cx="{cx:.1}" cy="{cy:.1}" r="{radius:.1}" fill="none" stroke="#787878" stroke-width="1.5"/>"##
        ));
        for value in &chart.gridlines {
            let (x, y) = project(chart.to_unit(RADIAL_LABEL_ANGLE, *value));
            elements.push(format!(
                r##"  <text x="{x:.1}" y="{y:.1}" text-anchor="middle" dominant-baseline="middle" font-size="{font_size:.0}" fill="#6e6e6e">{value:.0}</text>"##
            ));
        }

        let points = chart
            .vertices
            .iter()
            .map(|vertex| {
                let (x, y) = project(chart.to_unit(vertex.angle, vertex.value));
                format!("{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        elements.push(format!(
            r##"  <polygon points="{points}" fill="{color}" fill-opacity="{:.2}" stroke="{color}" stroke-width="{}" stroke-linejoin="round"/>"##,
            self.settings.fill_alpha, self.settings.line_width
        ));

        let label_gap = font_size * 1.2;
        for tick in &chart.ticks {
            let (ux, uy) = chart.to_unit(tick.angle, chart.radial_max);
            let x = cx + ux * (radius + label_gap);
            let y = cy - uy * (radius + label_gap);
            elements.push(format!(
                r##"  <text x="{x:.1}" y="{y:.1}" text-anchor="middle" dominant-baseline="middle" font-size="{font_size:.0}" fill="#1e1e1e">{}</text>"##,
                escape(&tick.label)
            ));
        }
        for annotation in &chart.annotations {
            let (x, y) = project(chart.to_unit(annotation.angle, annotation.radius));
            elements.push(format!(
                r##"  <text x="{x:.1}" y="{y:.1}" text-anchor="middle" dominant-baseline="middle" font-size="{font_size:.0}" fill="#1e1e1e">{}</text>"##,
                escape(&annotation.text)
            ));
        }
        if let Some(title) = &chart.title {
            let y = cy - radius - label_gap * 3.0;
            elements.push(format!(
                r##"  <text x="{cx:.1}" y="{y:.1}" text-anchor="middle" font-size="{:.0}" font-weight="600" fill="#1e1e1e">{}</text>"##,
                font_size * 1.6,
                escape(title)
            ));
        }

        let body = elements.join("\n");
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size:.0}" height="{size:.0}" viewBox="0 0 {size:.0} {size:.0}" style="background:white">
{body}
</svg>
"##
        )
    }
}

impl ChartRenderer for SvgRenderer {
    fn format(&self) -> ChartFormat {
        ChartFormat::Svg
    }

    fn render(&self, chart: &RadarChart) -> Result<Vec<u8>> {
        Ok(self.to_svg(chart).into_bytes())
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> RadarChart {
        let labels = vec!["13.1".to_string(), "13.2".to_string(), "13.3".to_string()];
        RadarChart::build(&[1, 2, 3], &labels).expect("chart should build")
    }

    #[test]
    fn svg_contains_polygon_ticks_and_gridlines() {
        let svg = SvgRenderer::new(ChartSettings::default()).to_svg(&chart());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("<polygon"));
        assert!(svg.contains(">13.2</text>"));
        assert_eq!(svg.matches("<circle").count(), 4);
        assert_eq!(svg.matches("<line").count(), 3);
        assert!(svg.contains("fill=\"#008080\""));
    }

    #[test]
    fn polygon_lists_closing_vertex() {
        let svg = SvgRenderer::new(ChartSettings::default()).to_svg(&chart());
        let points = svg
            .split("points=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .expect("polygon points should exist");
        let coords = points.split(' ').collect::<Vec<_>>();
        assert_eq!(coords.len(), 4);
        assert_eq!(coords.first(), coords.last());
    }

    #[test]
    fn svg_places_one_element_per_line() {
        let svg = SvgRenderer::new(ChartSettings::default()).to_svg(&chart());
        let elements = svg.lines().filter(|line| line.starts_with("  <")).count();
        // 3 gridlines, frame, 3 spokes, 3 radial labels, polygon, 3 ticks, 3 annotations.
        assert_eq!(elements, 17);
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn title_is_escaped() {
        let svg = SvgRenderer::new(ChartSettings::default()).to_svg(&chart().with_title("R&D"));
        assert!(svg.contains("R&amp;D"));
    }
}
