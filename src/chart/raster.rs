use super::font::{self, ADVANCE, GLYPH_H, GLYPH_W};
use super::{ChartRenderer, RadarChart, PLOT_RADIUS, RADIAL_LABEL_ANGLE};
use crate::error::Result;
use crate::types::config::{ChartFormat, ChartSettings};
use image::{imageops, Rgb, RgbImage};

struct Palette;
impl Palette {
    const BG: [u8; 3] = [255, 255, 255];
    const GRID: [u8; 3] = [210, 210, 210];
    const FRAME: [u8; 3] = [120, 120, 120];
    const TEXT: [u8; 3] = [30, 30, 30];
    const TEXT_DIM: [u8; 3] = [110, 110, 110];
}

const METERS_PER_INCH: f64 = 0.0254;

/// Software rasterizer producing PNG bytes.
pub struct PngRenderer {
    settings: ChartSettings,
}

impl PngRenderer {
    pub fn new(settings: ChartSettings) -> Self {
        Self { settings }
    }

    /// Draws the chart onto a canvas of at least `size` pixels, grown so no
    /// text or stroke reaches the edge. Cropping happens in `render`.
    pub fn rasterize(&self, chart: &RadarChart) -> RgbImage {
        let (layout, axis_labels, overlay_labels) = self.layout(chart);
        let mut canvas = Canvas::new(layout.width, layout.height);

        for value in &chart.gridlines {
            let r = layout.radius * chart.radius_fraction(*value);
            canvas.draw_circle(layout.cx, layout.cy, r, 1.0, Palette::GRID);
        }
        for tick in &chart.ticks {
            let (x, y) = layout.project(chart.to_unit(tick.angle, chart.radial_max));
            canvas.draw_line((layout.cx, layout.cy), (x, y), 1.0, Palette::GRID);
        }
        canvas.draw_circle(layout.cx, layout.cy, layout.radius, FRAME_HALF_WIDTH, Palette::FRAME);
        for label in &axis_labels {
            canvas.draw_label(&layout, label);
        }

        let points = chart
            .vertices
            .iter()
            .map(|vertex| layout.project(chart.to_unit(vertex.angle, vertex.value)))
            .collect::<Vec<_>>();
        canvas.fill_polygon(&points, self.settings.color, self.settings.fill_alpha);
        let half_width = self.settings.line_width as f64 / 2.0;
        for pair in points.windows(2) {
            canvas.draw_line(pair[0], pair[1], half_width, self.settings.color);
        }

        for label in &overlay_labels {
            canvas.draw_label(&layout, label);
        }

        canvas.image
    }

    /// Places every label relative to the plot center and sizes the canvas
    /// around them. Returns the labels drawn beneath the series and above it.
    fn layout(&self, chart: &RadarChart) -> (Layout, Vec<Label>, Vec<Label>) {
        let radius = self.settings.size as f64 * PLOT_RADIUS;
        let scale = self.settings.font_scale;
        let polar = |(ux, uy): (f64, f64), distance: f64| (ux * distance, -uy * distance);

        let axis_labels = chart
            .gridlines
            .iter()
            .map(|value| Label {
                offset: polar(chart.to_unit(RADIAL_LABEL_ANGLE, *value), radius),
                text: format!("{value:.0}"),
                scale,
                color: Palette::TEXT_DIM,
            })
            .collect::<Vec<_>>();

        let label_gap = (GLYPH_H * scale) as f64 * 1.4;
        let mut overlay_labels = chart
            .ticks
            .iter()
            .map(|tick| Label {
                offset: polar(chart.to_unit(tick.angle, chart.radial_max), radius + label_gap),
                text: tick.label.clone(),
                scale,
                color: Palette::TEXT,
            })
            .collect::<Vec<_>>();
        overlay_labels.extend(chart.annotations.iter().map(|annotation| Label {
            offset: polar(chart.to_unit(annotation.angle, annotation.radius), radius),
            text: annotation.text.clone(),
            scale,
            color: Palette::TEXT,
        }));
        if let Some(title) = &chart.title {
            let title_scale = scale + scale / 2 + 1;
            let dy = radius + label_gap * 2.0 + (GLYPH_H * title_scale) as f64;
            overlay_labels.push(Label {
                offset: (0.0, -dy),
                text: title.clone(),
                scale: title_scale,
                color: Palette::TEXT,
            });
        }

        let stroke = (self.settings.line_width as f64 / 2.0).max(FRAME_HALF_WIDTH);
        let layout = Layout::fit(
            self.settings.size,
            radius,
            stroke,
            axis_labels.iter().chain(&overlay_labels),
        );
        (layout, axis_labels, overlay_labels)
    }

    fn encode(&self, image: &RgbImage) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut encoder = png::Encoder::new(&mut bytes, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let ppu = (self.settings.dpi as f64 / METERS_PER_INCH).round() as u32;
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: ppu,
            yppu: ppu,
            unit: png::Unit::Meter,
        }));
        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.as_raw())?;
        writer.finish()?;
        Ok(bytes)
    }
}

impl ChartRenderer for PngRenderer {
    fn format(&self) -> ChartFormat {
        ChartFormat::Png
    }

    fn render(&self, chart: &RadarChart) -> Result<Vec<u8>> {
        let full = self.rasterize(chart);
        let pad = self.settings.font_scale * 4;
        let cropped = crop_to_content(&full, pad);
        tracing::debug!(
            width = cropped.width(),
            height = cropped.height(),
            dpi = self.settings.dpi,
            "rasterized radar chart"
        );
        self.encode(&cropped)
    }
}

/// Free pixels kept between any drawn content and the canvas edge.
const EDGE_MARGIN: f64 = 2.0;
const FRAME_HALF_WIDTH: f64 = 1.5;

struct Label {
    /// Center of the text relative to the plot center, y pointing down.
    offset: (f64, f64),
    text: String,
    scale: u32,
    color: [u8; 3],
}

struct Layout {
    cx: f64,
    cy: f64,
    radius: f64,
    width: u32,
    height: u32,
}

impl Layout {
    fn fit<'a>(
        size: u32,
        radius: f64,
        stroke: f64,
        labels: impl IntoIterator<Item = &'a Label>,
    ) -> Self {
        let reach = radius + stroke + EDGE_MARGIN;
        let mut half_w = (size as f64 / 2.0).max(reach);
        let mut half_h = half_w;
        for label in labels {
            let (w, h) = font::text_size(&label.text, label.scale);
            half_w = half_w.max(label.offset.0.abs() + w as f64 / 2.0 + EDGE_MARGIN);
            half_h = half_h.max(label.offset.1.abs() + h as f64 / 2.0 + EDGE_MARGIN);
        }
        let width = (half_w * 2.0).ceil() as u32;
        let height = (half_h * 2.0).ceil() as u32;
        Self {
            cx: width as f64 / 2.0,
            cy: height as f64 / 2.0,
            radius,
            width,
            height,
        }
    }

    fn project(&self, (ux, uy): (f64, f64)) -> (f64, f64) {
        (self.cx + ux * self.radius, self.cy - uy * self.radius)
    }
}

struct Canvas {
    image: RgbImage,
}

impl Canvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(Palette::BG)),
        }
    }

    fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.image.width() as i64 && y < self.image.height() as i64
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if self.in_bounds(x, y) {
            self.image.put_pixel(x as u32, y as u32, Rgb(color));
        }
    }

    fn blend_pixel(&mut self, x: i64, y: i64, color: [u8; 3], alpha: f32) {
        if !self.in_bounds(x, y) {
            return;
        }
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        for (channel, target) in pixel.0.iter_mut().zip(color) {
            let mixed = target as f32 * alpha + *channel as f32 * (1.0 - alpha);
            *channel = mixed.round().clamp(0.0, 255.0) as u8;
        }
    }

    fn stamp(&mut self, cx: f64, cy: f64, radius: f64, color: [u8; 3]) {
        let r = radius.max(0.5);
        let (x0, x1) = ((cx - r).floor() as i64, (cx + r).ceil() as i64);
        let (y0, y1) = ((cy - r).floor() as i64, (cy + r).ceil() as i64);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), half_width: f64, color: [u8; 3]) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let steps = (dx.abs().max(dy.abs()) * 2.0).ceil().max(1.0) as u32;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            self.stamp(from.0 + dx * t, from.1 + dy * t, half_width, color);
        }
    }

    fn draw_circle(&mut self, cx: f64, cy: f64, radius: f64, half_width: f64, color: [u8; 3]) {
        if radius <= 0.0 {
            return;
        }
        let steps = (radius * std::f64::consts::TAU).ceil().max(8.0) as u32;
        for step in 0..steps {
            let angle = std::f64::consts::TAU * step as f64 / steps as f64;
            self.stamp(
                cx + radius * angle.cos(),
                cy + radius * angle.sin(),
                half_width,
                color,
            );
        }
    }

    /// Even-odd scanline fill, sampling pixel centers.
    fn fill_polygon(&mut self, points: &[(f64, f64)], color: [u8; 3], alpha: f32) {
        if points.len() < 3 {
            return;
        }
        let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        let mut crossings = Vec::new();

        for y in min_y.floor() as i64..=max_y.ceil() as i64 {
            let sample = y as f64 + 0.5;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                if (a.1 <= sample && b.1 > sample) || (b.1 <= sample && a.1 > sample) {
                    let t = (sample - a.1) / (b.1 - a.1);
                    crossings.push(a.0 + t * (b.0 - a.0));
                }
            }
            crossings.sort_by(f64::total_cmp);
            for span in crossings.chunks_exact(2) {
                let start = (span[0] - 0.5).ceil() as i64;
                let end = (span[1] - 0.5).floor() as i64;
                for x in start..=end {
                    self.blend_pixel(x, y, color, alpha);
                }
            }
        }
    }

    fn draw_char(&mut self, x: i64, y: i64, ch: char, scale: u32, color: [u8; 3]) {
        let glyph = font::glyph(ch);
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        self.set_pixel(
                            x + (col * scale + sx) as i64,
                            y + (row as u32 * scale + sy) as i64,
                            color,
                        );
                    }
                }
            }
        }
    }

    fn draw_label(&mut self, layout: &Layout, label: &Label) {
        let (dx, dy) = label.offset;
        self.draw_text_centered(
            layout.cx + dx,
            layout.cy + dy,
            &label.text,
            label.scale,
            label.color,
        );
    }

    fn draw_text_centered(&mut self, cx: f64, cy: f64, text: &str, scale: u32, color: [u8; 3]) {
        let (w, h) = font::text_size(text, scale);
        let x0 = (cx - w as f64 / 2.0).round() as i64;
        let y0 = (cy - h as f64 / 2.0).round() as i64;
        for (i, ch) in text.chars().enumerate() {
            self.draw_char(x0 + (i as u32 * ADVANCE * scale) as i64, y0, ch, scale, color);
        }
    }
}

/// Crops to the bounding box of non-background pixels plus `pad`.
fn crop_to_content(image: &RgbImage, pad: u32) -> RgbImage {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0 == Palette::BG {
            continue;
        }
        bounds = Some(match bounds {
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            None => (x, y, x, y),
        });
    }
    let Some((x0, y0, x1, y1)) = bounds else {
        return image.clone();
    };
    let left = x0.saturating_sub(pad);
    let top = y0.saturating_sub(pad);
    let right = (x1 + pad).min(image.width() - 1);
    let bottom = (y1 + pad).min(image.height() - 1);
    imageops::crop_imm(image, left, top, right - left + 1, bottom - top + 1).to_image()
}
