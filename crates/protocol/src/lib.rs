pub mod commands;
pub mod theme;
pub mod types;

pub use commands::{DomCommand, ElementRef};
pub use theme::{AccentToken, Glow};
pub use types::{Point, Rect, Rgb, ScrollOffsets, Viewport};
