use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An element box in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form, upper-case hex digits.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Page scroll position as reported by the browser.
///
/// Older engines only expose the body scroll offsets, so both are carried
/// and the consumer picks one (see [`ScrollOffsets::origin`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffsets {
    pub page_x: f64,
    pub page_y: f64,
    pub body_left: f64,
    pub body_top: f64,
}

impl ScrollOffsets {
    /// Document-space origin of the viewport.
    ///
    /// Uses the page offsets when a vertical page offset is reported and
    /// falls back to the body scroll offsets otherwise.
    pub fn origin(&self) -> Point {
        if self.page_y != 0.0 {
            Point::new(self.page_x, self.page_y)
        } else {
            Point::new(self.body_left, self.body_top)
        }
    }
}

/// The visible window of the report page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll: ScrollOffsets,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll: ScrollOffsets::default(),
        }
    }

    pub fn with_scroll(mut self, scroll: ScrollOffsets) -> Self {
        self.scroll = scroll;
        self
    }
}
