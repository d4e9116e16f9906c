use wet_report_protocol::{Point, Rect, Viewport};

use crate::config::OverlayConfig;

/// The singleton floating preview frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewOverlay {
    /// URL the frame was last navigated to.
    pub source: Option<String>,
    /// Document-space box of the link that requested the current preview.
    pub anchor: Option<Rect>,
    /// Measured frame height plus padding; measured once, then reused.
    pub cached_height: Option<f64>,
    pub position: Option<Point>,
    pub visible: bool,
}

impl PreviewOverlay {
    /// Whether `src` points at something the preview frame can show.
    pub fn is_eligible(src: &str) -> bool {
        src.ends_with(".html") || src.contains(".html?highlight=") || src.ends_with(".txt")
    }

    /// Convert a link's client box to document coordinates using the
    /// scroll position at the time it was measured.
    pub fn document_anchor(client: Rect, viewport: &Viewport) -> Rect {
        let origin = viewport.scroll.origin();
        Rect::new(client.x + origin.x, client.y + origin.y, client.w, client.h)
    }

    /// Document-space position for a frame of height `frame_height` next to
    /// the document-space `anchor`: right of it, kept inside the current
    /// viewport bottom and below the minimum top margin.
    pub fn placement(
        anchor: Rect,
        frame_height: f64,
        viewport: &Viewport,
        config: &OverlayConfig,
    ) -> Point {
        let origin = viewport.scroll.origin();
        let client_top = anchor.top() - origin.y;
        let x = anchor.right() + config.margin_x;
        let y = client_top
            .min(viewport.height - frame_height)
            .max(config.min_top);
        Point::new(x, y + origin.y)
    }
}
