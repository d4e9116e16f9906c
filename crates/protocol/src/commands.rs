use serde::{Deserialize, Serialize};

use crate::theme::Glow;
use crate::types::Point;

/// How a command addresses elements on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementRef {
    /// The single element with this id.
    Id(String),
    /// Every element carrying this class.
    Class(String),
}

impl ElementRef {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    /// CSS selector matching the referenced element(s).
    pub fn selector(&self) -> String {
        match self {
            Self::Id(id) => format!("#{id}"),
            Self::Class(class) => format!(".{class}"),
        }
    }
}

/// A single, stateless DOM instruction.
///
/// The controller answers every operation with a `Vec<DomCommand>`. Hosts
/// apply the list in order; each command carries all the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomCommand {
    /// Show (`display: ""`) or hide (`display: none`) an element.
    SetDisplay { id: String, visible: bool },

    /// Point an `<img>` at a new resource.
    SetImageSource { id: String, src: String },

    AddClass { target: ElementRef, class: String },

    RemoveClass { target: ElementRef, class: String },

    /// Navigate the preview frame, replacing its history entry.
    NavigateOverlay { url: String },

    /// Move the preview frame to a document-space position.
    PlaceOverlay { position: Point },

    ShowOverlay,

    HideOverlay,

    /// Hide the overlay whenever the pointer leaves or re-enters the
    /// overlay's own document.
    BindOverlayHover,

    /// Run the highlight routine inside the overlay's document.
    HighlightInOverlay,

    /// Set the `box-shadow` of the element matching `selector`.
    ApplyGlow { selector: String, glow: Glow },

    /// Set the `box-shadow` of the first `<img>` inside `selector`.
    ApplyGlowToFirstImage { selector: String, glow: Glow },

    /// Raise the element's margin to at least `px` on every side.
    EnsureMinMargin { selector: String, px: f64 },

    /// Scroll the page so that `position` is the top-left corner.
    ScrollTo { position: Point, smooth: bool },
}
