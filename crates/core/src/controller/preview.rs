use wet_report_protocol::{DomCommand, Rect, Viewport};

use super::ReportController;
use crate::model::PreviewOverlay;

impl ReportController {
    /// Start previewing `src` for the link whose client box is `anchor`,
    /// measured while the page was at `viewport`'s scroll position.
    ///
    /// Sources other than `.html` / `.txt` pages are ignored and leave the
    /// overlay as it was. Placement happens in [`Self::overlay_loaded`]
    /// once the frame finishes loading.
    pub fn show_preview(
        &mut self,
        src: &str,
        anchor: Rect,
        viewport: &Viewport,
    ) -> Vec<DomCommand> {
        if !PreviewOverlay::is_eligible(src) {
            tracing::debug!("preview: ignoring {src:?}");
            return Vec::new();
        }
        let overlay = &mut self.state.overlay;
        overlay.source = Some(src.to_string());
        overlay.anchor = Some(PreviewOverlay::document_anchor(anchor, viewport));
        vec![DomCommand::NavigateOverlay {
            url: src.to_string(),
        }]
    }

    /// The preview frame finished loading.
    ///
    /// `measure` is only called while no height is cached; it must make the
    /// frame visible and return its rendered height. The padded result is
    /// kept for every later placement.
    pub fn overlay_loaded(
        &mut self,
        viewport: &Viewport,
        measure: impl FnOnce() -> f64,
    ) -> Vec<DomCommand> {
        let Some(anchor) = self.state.overlay.anchor else {
            tracing::debug!("preview: load without a requesting link");
            return Vec::new();
        };

        let height = match self.state.overlay.cached_height {
            Some(height) => height,
            None => {
                let height = measure() + self.config.overlay.height_padding;
                self.state.overlay.cached_height = Some(height);
                height
            }
        };

        let position = PreviewOverlay::placement(anchor, height, viewport, &self.config.overlay);
        let overlay = &mut self.state.overlay;
        tracing::trace!(source = ?overlay.source, ?position, "preview: placing overlay");
        overlay.position = Some(position);
        overlay.visible = true;

        vec![
            DomCommand::PlaceOverlay { position },
            DomCommand::ShowOverlay,
            DomCommand::BindOverlayHover,
            DomCommand::HighlightInOverlay,
        ]
    }

    pub fn hide_preview(&mut self) -> Vec<DomCommand> {
        self.state.overlay.visible = false;
        vec![DomCommand::HideOverlay]
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::controller;
    use super::*;
    use pretty_assertions::assert_eq;
    use wet_report_protocol::{Point, ScrollOffsets};

    fn unscrolled() -> Viewport {
        Viewport::new(1000.0, 600.0)
    }

    #[test]
    fn ineligible_source_leaves_overlay_untouched() {
        let mut c = controller();
        c.show_preview("step.html", Rect::new(0.0, 0.0, 10.0, 10.0), &unscrolled());
        let before = c.state().overlay.clone();
        assert!(
            c.show_preview("report.csv", Rect::new(5.0, 5.0, 1.0, 1.0), &unscrolled())
                .is_empty()
        );
        assert_eq!(c.state().overlay, before);
    }

    #[test]
    fn txt_source_navigates_overlay() {
        let mut c = controller();
        let cmds = c.show_preview("report.txt", Rect::new(0.0, 0.0, 10.0, 10.0), &unscrolled());
        assert_eq!(
            cmds,
            vec![DomCommand::NavigateOverlay {
                url: "report.txt".into()
            }]
        );
        assert_eq!(c.state().overlay.source.as_deref(), Some("report.txt"));
    }

    #[test]
    fn height_measured_once() {
        let mut c = controller();
        let vp = unscrolled();
        c.show_preview("a.html", Rect::new(100.0, 500.0, 40.0, 12.0), &vp);
        assert_eq!(c.state().overlay.cached_height, None);

        let cmds = c.overlay_loaded(&vp, || 300.0);
        assert_eq!(
            cmds,
            vec![
                DomCommand::PlaceOverlay {
                    position: Point::new(160.0, 270.0)
                },
                DomCommand::ShowOverlay,
                DomCommand::BindOverlayHover,
                DomCommand::HighlightInOverlay,
            ]
        );
        assert_eq!(c.state().overlay.cached_height, Some(330.0));

        c.show_preview("b.html", Rect::new(100.0, 20.0, 40.0, 12.0), &vp);
        let mut measured = false;
        c.overlay_loaded(&vp, || {
            measured = true;
            999.0
        });
        assert!(!measured);
        assert_eq!(c.state().overlay.position, Some(Point::new(160.0, 20.0)));
    }

    #[test]
    fn load_without_request_is_noop() {
        let mut c = controller();
        assert!(c.overlay_loaded(&Viewport::new(100.0, 100.0), || 10.0).is_empty());
        assert!(!c.state().overlay.visible);
    }

    #[test]
    fn hide_preview_is_unconditional() {
        let mut c = controller();
        assert_eq!(c.hide_preview(), vec![DomCommand::HideOverlay]);
        c.show_preview("a.html", Rect::new(0.0, 0.0, 1.0, 1.0), &unscrolled());
        c.overlay_loaded(&unscrolled(), || 100.0);
        assert!(c.state().overlay.visible);
        c.hide_preview();
        assert!(!c.state().overlay.visible);
    }

    #[test]
    fn page_scrolled_while_frame_loads() {
        let mut c = controller();
        c.show_preview("a.html", Rect::new(40.0, 100.0, 60.0, 14.0), &unscrolled());

        let scrolled = unscrolled().with_scroll(ScrollOffsets {
            page_y: 500.0,
            ..ScrollOffsets::default()
        });
        c.overlay_loaded(&scrolled, || 300.0);
        assert_eq!(c.state().overlay.position, Some(Point::new(120.0, 510.0)));

        // Hovered while scrolled: the anchor is kept in document space.
        c.show_preview("b.html", Rect::new(40.0, 100.0, 60.0, 14.0), &scrolled);
        assert_eq!(
            c.state().overlay.anchor,
            Some(Rect::new(40.0, 600.0, 60.0, 14.0))
        );
        c.overlay_loaded(&scrolled, || 300.0);
        assert_eq!(c.state().overlay.position, Some(Point::new(120.0, 600.0)));
    }
}
