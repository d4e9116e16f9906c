//! The Report View Controller.
//!
//! Operations are split by concern across the submodules; each one mutates
//! the [`ViewState`] and returns the DOM commands that bring the page in
//! line with it. Failure modes (unknown icons, ineligible preview sources,
//! unresolvable highlight targets) are silent: they log at debug level and
//! return no commands.

mod filter;
pub mod highlight;
mod overview;
mod preview;
mod toggle;

pub use highlight::ElementLayout;

use crate::config::ReportConfig;
use crate::model::{PageSnapshot, ViewState};

#[derive(Debug, Clone)]
pub struct ReportController {
    config: ReportConfig,
    state: ViewState,
}

impl ReportController {
    pub fn new(config: ReportConfig, snapshot: &PageSnapshot) -> Self {
        let state = ViewState::from_snapshot(snapshot);
        tracing::info!(
            icons = state.icons.len(),
            sections = state.sections.len(),
            "report controller ready"
        );
        Self { config, state }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::model::{IconSnapshot, SectionSnapshot};

    /// A small report: overview switcher plus three sections, the second
    /// one collapsed, with one sub-scope log icon.
    pub fn sample_snapshot() -> PageSnapshot {
        let icon = |id: &str, src: &str| IconSnapshot {
            id: id.into(),
            src: format!("images/{src}"),
        };
        let section = |id: &str, visible: bool| SectionSnapshot {
            id: id.into(),
            visible,
        };
        PageSnapshot {
            icons: vec![
                icon("overviewswitcher", "collapse-square.png"),
                icon("showHide_1", "collapse-square.png"),
                icon("showHide_2", "expand-square.png"),
                icon("showHide_3", "collapse-square.png"),
                icon("log_1", "collapse-circle.png"),
            ],
            sections: vec![
                section("1", true),
                section("2", false),
                section("3", true),
                section("log1", true),
            ],
            detailed_overview_visible: false,
        }
    }

    pub fn controller() -> ReportController {
        ReportController::new(ReportConfig::default(), &sample_snapshot())
    }
}
