use serde::{Deserialize, Serialize};
use wet_report_protocol::{AccentToken, DomCommand, Glow, Point, Rect, Rgb};

use crate::color;
use crate::config::HighlightConfig;
use crate::query;

/// Query parameter naming the element to emphasize.
const HIGHLIGHT_PARAM: &str = "highlight";

/// Form controls whose rendering clips an inset shadow.
const INPUT_CONTROL_TYPES: &[&str] = &["checkbox", "radio", "button", "submit", "reset", "image"];

/// Layout facts about the resolved highlight target, measured by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementLayout {
    pub tag_name: String,
    /// `type` attribute, for `<input>` elements.
    pub input_type: Option<String>,
    /// Computed background color; `None` when transparent.
    pub background: Option<Rgb>,
    /// Border box in client coordinates.
    pub border_box: Rect,
    pub content_width: f64,
    pub content_height: f64,
    /// Top-left corner in document coordinates.
    pub page_offset: Point,
    /// Whether the element contains an `<img>`.
    pub contains_image: bool,
}

impl ElementLayout {
    fn is_form_control(&self) -> bool {
        match self.tag_name.to_ascii_lowercase().as_str() {
            "select" | "button" => true,
            "input" => self
                .input_type
                .as_deref()
                .is_some_and(|t| INPUT_CONTROL_TYPES.contains(&t.to_ascii_lowercase().as_str())),
            _ => false,
        }
    }

    fn is_image_link(&self) -> bool {
        self.tag_name.eq_ignore_ascii_case("a") && self.contains_image
    }
}

/// Selector to highlight, read from the `highlight` query parameter.
///
/// `contexts` are location search strings, the current document first
/// and then each enclosing frame outwards.
pub fn highlight_target<S: AsRef<str>>(
    config: &HighlightConfig,
    contexts: &[S],
) -> Option<String> {
    let target = query::find_in_contexts(contexts, HIGHLIGHT_PARAM, config.ancestor_depth_limit);
    if target.is_none() {
        tracing::debug!(contexts = contexts.len(), "highlight: no target");
    }
    target
}

fn accent_for(config: &HighlightConfig, background: Option<Rgb>) -> AccentToken {
    let reference = color::hue(config.accent(AccentToken::Primary));
    match (background.and_then(color::hue), reference) {
        (Some(bg), Some(accent)) if color::hue_distance(bg, accent) <= config.hue_threshold_deg => {
            AccentToken::Blue
        }
        _ => AccentToken::Primary,
    }
}

/// Emphasize the element matched by `selector` and scroll it into view.
pub fn plan_highlight(
    config: &HighlightConfig,
    selector: &str,
    layout: &ElementLayout,
) -> Vec<DomCommand> {
    let accent = accent_for(config, layout.background);
    let mut commands = Vec::with_capacity(4);

    if layout.is_form_control() {
        commands.push(DomCommand::ApplyGlow {
            selector: selector.to_string(),
            glow: Glow::outer(accent),
        });
        commands.push(DomCommand::EnsureMinMargin {
            selector: selector.to_string(),
            px: config.min_control_margin_px,
        });
    } else {
        let thin = layout.border_box.w - layout.content_width <= config.thin_chrome_px
            && layout.border_box.h - layout.content_height <= config.thin_chrome_px;
        let glow = if thin {
            Glow::inset(accent)
        } else {
            Glow::outer(accent)
        };
        commands.push(DomCommand::ApplyGlow {
            selector: selector.to_string(),
            glow,
        });
    }

    if layout.is_image_link() {
        commands.push(DomCommand::ApplyGlowToFirstImage {
            selector: selector.to_string(),
            glow: Glow::outer(accent),
        });
    }

    let target = Point::new(
        (layout.page_offset.x - config.scroll_margin.x).max(0.0),
        (layout.page_offset.y - config.scroll_margin.y).max(0.0),
    );
    commands.push(DomCommand::ScrollTo {
        position: target,
        smooth: true,
    });
    commands
}
