use crate::error::SurveyError;
use crate::scoring::RatingPolicy;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurveyConfig {
    pub scoring: Option<ScoringConfig>,
    pub chart: Option<ChartConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub out_of_range: Option<RatingPolicy>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    #[default]
    Png,
    Svg,
}

impl ChartFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    pub format: Option<ChartFormat>,
    pub size: Option<u32>,
    pub dpi: Option<u32>,
    pub font_scale: Option<u32>,
    pub line_width: Option<u32>,
    pub color: Option<String>,
    pub fill_alpha: Option<f32>,
    pub title: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSettings {
    pub format: ChartFormat,
    pub size: u32,
    pub dpi: u32,
    pub font_scale: u32,
    pub line_width: u32,
    pub color: [u8; 3],
    pub fill_alpha: f32,
    pub title: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            format: ChartFormat::Png,
            size: 1200,
            dpi: 300,
            font_scale: 3,
            line_width: 4,
            color: [0x00, 0x80, 0x80],
            fill_alpha: 0.25,
            title: true,
        }
    }
}

impl SurveyConfig {
    pub fn rating_policy(&self) -> RatingPolicy {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.out_of_range)
            .unwrap_or_default()
    }

    /// Chart settings with defaults filled in. Call `validate` first.
    pub fn chart_settings(&self) -> ChartSettings {
        let defaults = ChartSettings::default();
        match &self.chart {
            Some(chart) => ChartSettings {
                format: chart.format.unwrap_or(defaults.format),
                size: chart.size.unwrap_or(defaults.size),
                dpi: chart.dpi.unwrap_or(defaults.dpi),
                font_scale: chart.font_scale.unwrap_or(defaults.font_scale),
                line_width: chart.line_width.unwrap_or(defaults.line_width),
                color: chart
                    .color
                    .as_deref()
                    .and_then(|color| parse_hex_color(color).ok())
                    .unwrap_or(defaults.color),
                fill_alpha: chart.fill_alpha.unwrap_or(defaults.fill_alpha),
                title: chart.title.unwrap_or(defaults.title),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), SurveyError> {
        let Some(chart) = &self.chart else {
            return Ok(());
        };

        if let Some(size) = chart.size {
            if !(200..=6000).contains(&size) {
                return Err(SurveyError::ConfigParse(
                    "chart.size must be between 200 and 6000".to_string(),
                ));
            }
        }
        if chart.dpi == Some(0) {
            return Err(SurveyError::ConfigParse(
                "chart.dpi must be greater than 0".to_string(),
            ));
        }
        if let Some(font_scale) = chart.font_scale {
            if !(1..=10).contains(&font_scale) {
                return Err(SurveyError::ConfigParse(
                    "chart.font_scale must be between 1 and 10".to_string(),
                ));
            }
        }
        if let Some(line_width) = chart.line_width {
            if !(1..=32).contains(&line_width) {
                return Err(SurveyError::ConfigParse(
                    "chart.line_width must be between 1 and 32".to_string(),
                ));
            }
        }
        if let Some(fill_alpha) = chart.fill_alpha {
            if !(0.0..=1.0).contains(&fill_alpha) {
                return Err(SurveyError::ConfigParse(
                    "chart.fill_alpha must be between 0.0 and 1.0".to_string(),
                ));
            }
        }
        if let Some(color) = &chart.color {
            parse_hex_color(color)?;
        }

        Ok(())
    }
}

pub fn parse_hex_color(value: &str) -> Result<[u8; 3], SurveyError> {
    let invalid = || SurveyError::ConfigParse(format!("chart.color must be #rrggbb: {value}"));
    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Ok([r, g, b]),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: SurveyConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.rating_policy(), RatingPolicy::Reject);
        assert_eq!(cfg.chart_settings(), ChartSettings::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r##"
[scoring]
out_of_range = "clamp"

[chart]
format = "svg"
size = 800
dpi = 150
font_scale = 2
line_width = 3
color = "#1f77b4"
fill_alpha = 0.5
title = false
"##;
        let cfg: SurveyConfig = toml::from_str(toml_str).expect("full config should parse");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.rating_policy(), RatingPolicy::Clamp);
        let settings = cfg.chart_settings();
        assert_eq!(settings.format, ChartFormat::Svg);
        assert_eq!(settings.size, 800);
        assert_eq!(settings.dpi, 150);
        assert_eq!(settings.color, [0x1f, 0x77, 0xb4]);
        assert!(!settings.title);
    }

    #[test]
    fn validate_rejects_zero_dpi() {
        let cfg: SurveyConfig = toml::from_str("[chart]\ndpi = 0\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("chart.dpi must be greater than 0"));
    }

    #[test]
    fn validate_rejects_alpha_out_of_range() {
        let cfg: SurveyConfig =
            toml::from_str("[chart]\nfill_alpha = 1.5\n").expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_tiny_canvas() {
        let cfg: SurveyConfig = toml::from_str("[chart]\nsize = 50\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("chart.size"));
    }

    #[test]
    fn validate_rejects_malformed_color() {
        let cfg: SurveyConfig =
            toml::from_str("[chart]\ncolor = \"teal\"\n").expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("#rrggbb"));
    }

    #[test]
    fn parse_rejects_unknown_policy() {
        let parsed = toml::from_str::<SurveyConfig>("[scoring]\nout_of_range = \"ignore\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn hex_color_parses_channels() {
        assert_eq!(parse_hex_color("#008080").expect("color"), [0, 128, 128]);
        assert!(parse_hex_color("#00808").is_err());
        assert!(parse_hex_color("008080").is_err());
    }

    #[test]
    fn format_reports_extension_and_mime() {
        assert_eq!(ChartFormat::Png.extension(), "png");
        assert_eq!(ChartFormat::Png.mime_type(), "image/png");
        assert_eq!(ChartFormat::Svg.mime_type(), "image/svg+xml");
    }
}
