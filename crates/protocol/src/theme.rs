use serde::{Deserialize, Serialize};

use crate::types::Rgb;

/// Semantic highlight colors resolved by the host's active configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccentToken {
    /// The report's signature accent.
    Primary,
    /// Fallback used when the element background is too close to `Primary`.
    Blue,
}

/// A colored glow drawn around (or inside) a highlighted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glow {
    pub accent: AccentToken,
    /// Draw inside the border box so thin-chrome elements don't clip it.
    pub inset: bool,
}

impl Glow {
    pub fn outer(accent: AccentToken) -> Self {
        Self {
            accent,
            inset: false,
        }
    }

    pub fn inset(accent: AccentToken) -> Self {
        Self {
            accent,
            inset: true,
        }
    }

    /// CSS `box-shadow` value for this glow in the given color.
    pub fn to_box_shadow(self, color: Rgb) -> String {
        let shadow = format!("0 0 2px 2px {}", color.to_hex());
        if self.inset {
            format!("inset {shadow}")
        } else {
            shadow
        }
    }
}
