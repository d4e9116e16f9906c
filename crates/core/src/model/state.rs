use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::icon::{ToggleIcon, ToggleState};
use crate::model::overlay::PreviewOverlay;

/// The two mutually exclusive top-level result tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverviewTable {
    Summary,
    Detailed,
}

impl OverviewTable {
    pub fn other(self) -> Self {
        match self {
            Self::Summary => Self::Detailed,
            Self::Detailed => Self::Summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSnapshot {
    pub id: String,
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSnapshot {
    pub id: String,
    pub visible: bool,
}

/// What a host reads from the page once, at load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSnapshot {
    pub icons: Vec<IconSnapshot>,
    pub sections: Vec<SectionSnapshot>,
    pub detailed_overview_visible: bool,
}

/// Explicit UI state of one report page.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub icons: BTreeMap<String, ToggleIcon>,
    /// Section id -> currently visible.
    pub sections: BTreeMap<String, bool>,
    pub overview: OverviewTable,
    pub successful_hidden: bool,
    pub overlay: PreviewOverlay,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            icons: BTreeMap::new(),
            sections: BTreeMap::new(),
            overview: OverviewTable::Summary,
            successful_hidden: false,
            overlay: PreviewOverlay::default(),
        }
    }
}

impl ViewState {
    /// Build state from a page snapshot. Images that are not toggle icons
    /// are skipped.
    pub fn from_snapshot(snapshot: &PageSnapshot) -> Self {
        let icons = snapshot
            .icons
            .iter()
            .filter_map(|icon| match ToggleIcon::parse(&icon.src) {
                Ok(parsed) => Some((icon.id.clone(), parsed)),
                Err(e) => {
                    tracing::debug!("skipping image {:?}: {e}", icon.id);
                    None
                }
            })
            .collect();
        let sections = snapshot
            .sections
            .iter()
            .map(|s| (s.id.clone(), s.visible))
            .collect();
        let overview = if snapshot.detailed_overview_visible {
            OverviewTable::Detailed
        } else {
            OverviewTable::Summary
        };

        Self {
            icons,
            sections,
            overview,
            successful_hidden: false,
            overlay: PreviewOverlay::default(),
        }
    }

    pub fn icon_state(&self, icon_id: &str) -> Option<ToggleState> {
        self.icons.get(icon_id).map(ToggleIcon::state)
    }

    pub fn is_section_visible(&self, section_id: &str) -> Option<bool> {
        self.sections.get(section_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_skips_non_toggle_images() {
        let snapshot = PageSnapshot {
            icons: vec![
                IconSnapshot {
                    id: "showHide_1".into(),
                    src: "images/collapse-square.png".into(),
                },
                IconSnapshot {
                    id: "logo".into(),
                    src: "images/wetator.png".into(),
                },
            ],
            sections: vec![SectionSnapshot {
                id: "1".into(),
                visible: true,
            }],
            detailed_overview_visible: true,
        };
        let state = ViewState::from_snapshot(&snapshot);
        assert_eq!(state.icons.len(), 1);
        assert_eq!(state.icon_state("showHide_1"), Some(ToggleState::Expanded));
        assert_eq!(state.is_section_visible("1"), Some(true));
        assert_eq!(state.overview, OverviewTable::Detailed);
    }

    #[test]
    fn snapshot_json_fields_default() {
        let snapshot: PageSnapshot = serde_json::from_str(r#"{"icons":[]}"#).unwrap();
        assert_eq!(snapshot, PageSnapshot::default());
    }
}
