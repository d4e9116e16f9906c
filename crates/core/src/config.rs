use serde::{Deserialize, Serialize};
use wet_report_protocol::{AccentToken, Point, Rgb};

use crate::color;
use crate::error::ConfigError;

/// Element ids and class names the report markup is generated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub preview: String,
    pub summary_overview: String,
    pub detailed_overview: String,
    pub overview_switcher: String,
    /// Section `foo` is toggled by the icon with id `<prefix>foo`.
    pub section_icon_prefix: String,
    pub show_all: String,
    pub hide_successful: String,
    pub successful_class: String,
    pub hidden_class: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            preview: "preview".into(),
            summary_overview: "summaryoverview".into(),
            detailed_overview: "detailedoverview".into(),
            overview_switcher: "overviewswitcher".into(),
            section_icon_prefix: "showHide_".into(),
            show_all: "showAll".into(),
            hide_successful: "hideSuccessful".into(),
            successful_class: "successful".into(),
            hidden_class: "hidden".into(),
        }
    }
}

impl ElementIds {
    pub fn section_icon(&self, section_id: &str) -> String {
        format!("{}{section_id}", self.section_icon_prefix)
    }
}

/// Placement of the hover preview frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Gap between the hovered link's right edge and the frame.
    pub margin_x: f64,
    /// The frame never starts above this many pixels from the viewport top.
    pub min_top: f64,
    /// Added once to the measured frame height before it is cached.
    pub height_padding: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            margin_x: 20.0,
            min_top: 10.0,
            height_padding: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Delay between a document load and the highlight pass.
    pub delay_ms: u32,
    /// Subtracted from the target's page offset before scrolling.
    pub scroll_margin: Point,
    /// How many enclosing frames are searched for the `highlight` parameter.
    pub ancestor_depth_limit: usize,
    pub primary_accent: String,
    pub blue_accent: String,
    pub hue_threshold_deg: f64,
    pub min_control_margin_px: f64,
    /// Border+padding allowance below which an inset glow is used.
    pub thin_chrome_px: f64,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            delay_ms: 44,
            scroll_margin: Point::new(200.0, 400.0),
            ancestor_depth_limit: 8,
            primary_accent: "#E65212".into(),
            blue_accent: "#1F78D1".into(),
            hue_threshold_deg: 20.0,
            min_control_margin_px: 3.0,
            thin_chrome_px: 4.0,
        }
    }
}

impl HighlightConfig {
    /// Concrete color for an accent token.
    ///
    /// Falls back to the built-in accent when the configured value does not
    /// parse; [`ReportConfig::validate`] rejects such values up front.
    pub fn accent(&self, token: AccentToken) -> Rgb {
        match token {
            AccentToken::Primary => {
                color::parse_hex(&self.primary_accent).unwrap_or(Rgb::new(0xE6, 0x52, 0x12))
            }
            AccentToken::Blue => {
                color::parse_hex(&self.blue_accent).unwrap_or(Rgb::new(0x1F, 0x78, 0xD1))
            }
        }
    }
}

/// Top-level configuration for a [`crate::ReportController`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub ids: ElementIds,
    pub overlay: OverlayConfig,
    pub highlight: HighlightConfig,
}

impl ReportConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for accent in [&self.highlight.primary_accent, &self.highlight.blue_accent] {
            if color::parse_hex(accent).is_none() {
                return Err(ConfigError::InvalidColor(accent.clone()));
            }
        }
        let threshold = self.highlight.hue_threshold_deg;
        if !(0.0..=180.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(())
    }
}
