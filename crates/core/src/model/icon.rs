use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Visibility of the section a toggle icon governs.
///
/// An icon always shows the action a click would perform, so a
/// `Collapsed` section carries the *expand* image and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToggleState {
    Expanded,
    Collapsed,
}

impl ToggleState {
    pub fn flipped(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == Self::Collapsed
    }

    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed {
            Self::Collapsed
        } else {
            Self::Expanded
        }
    }
}

/// Independent icon pairs used across the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconFamily {
    /// Top-level sections and the global switchers.
    Square,
    /// Sub-scope (log) entries.
    Circle,
    /// Sub-scope entries containing warnings.
    CircleWarn,
}

#[derive(Debug, PartialEq, Eq)]
struct IconPair {
    family: IconFamily,
    expand: &'static str,
    collapse: &'static str,
}

const ICON_PAIRS: &[IconPair] = &[
    IconPair {
        family: IconFamily::Square,
        expand: "expand-square.png",
        collapse: "collapse-square.png",
    },
    IconPair {
        family: IconFamily::Circle,
        expand: "expand-circle.png",
        collapse: "collapse-circle.png",
    },
    IconPair {
        family: IconFamily::CircleWarn,
        expand: "expand-circle-warn.png",
        collapse: "collapse-circle-warn.png",
    },
    // Names used by older report templates.
    IconPair {
        family: IconFamily::Square,
        expand: "expandall.png",
        collapse: "collapseall.png",
    },
    IconPair {
        family: IconFamily::Circle,
        expand: "expandlog.png",
        collapse: "collapselog.png",
    },
    IconPair {
        family: IconFamily::CircleWarn,
        expand: "expandlogwarn.png",
        collapse: "collapselogwarn.png",
    },
];

/// A toggle icon decoded from its image URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleIcon {
    /// Everything up to and including the last `/` of the original URL.
    prefix: String,
    pair: &'static IconPair,
    state: ToggleState,
}

impl ToggleIcon {
    /// Decode an image URL such as `../images/collapse-square.png`.
    pub fn parse(src: &str) -> Result<Self, ReportError> {
        let path = src.split(['?', '#']).next().unwrap_or_default();
        let split = path.rfind('/').map_or(0, |i| i + 1);
        let (prefix, file) = path.split_at(split);

        ICON_PAIRS
            .iter()
            .find_map(|pair| {
                if file == pair.expand {
                    Some((pair, ToggleState::Collapsed))
                } else if file == pair.collapse {
                    Some((pair, ToggleState::Expanded))
                } else {
                    None
                }
            })
            .map(|(pair, state)| Self {
                prefix: prefix.to_string(),
                pair,
                state,
            })
            .ok_or_else(|| ReportError::UnknownIcon(src.to_string()))
    }

    pub fn family(&self) -> IconFamily {
        self.pair.family
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// Whether the icon currently offers to expand its section.
    pub fn shows_expand(&self) -> bool {
        self.state.is_collapsed()
    }

    /// Swap to the sibling image of the same family. Returns the new state.
    pub fn toggle(&mut self) -> ToggleState {
        self.state = self.state.flipped();
        self.state
    }

    /// Full image URL for the current state, original path prefix kept.
    pub fn src(&self) -> String {
        let file = match self.state {
            ToggleState::Collapsed => self.pair.expand,
            ToggleState::Expanded => self.pair.collapse,
        };
        format!("{}{file}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_family() {
        let icon = ToggleIcon::parse("images/collapse-square.png").unwrap();
        assert_eq!(icon.family(), IconFamily::Square);
        assert_eq!(icon.state(), ToggleState::Expanded);

        let icon = ToggleIcon::parse("images/expand-circle.png").unwrap();
        assert_eq!(icon.family(), IconFamily::Circle);
        assert_eq!(icon.state(), ToggleState::Collapsed);

        let icon = ToggleIcon::parse("images/expand-circle-warn.png").unwrap();
        assert_eq!(icon.family(), IconFamily::CircleWarn);
        assert!(icon.shows_expand());
    }

    #[test]
    fn toggling_keeps_prefix_and_family() {
        let mut icon = ToggleIcon::parse("file:///tmp/report/images/collapse-circle.png").unwrap();
        assert_eq!(icon.toggle(), ToggleState::Collapsed);
        assert_eq!(icon.src(), "file:///tmp/report/images/expand-circle.png");
        assert_eq!(icon.toggle(), ToggleState::Expanded);
        assert_eq!(icon.src(), "file:///tmp/report/images/collapse-circle.png");
    }

    #[test]
    fn legacy_names_stay_legacy() {
        let mut icon = ToggleIcon::parse("res/expandlogwarn.png").unwrap();
        assert_eq!(icon.family(), IconFamily::CircleWarn);
        icon.toggle();
        assert_eq!(icon.src(), "res/collapselogwarn.png");
    }

    #[test]
    fn bare_file_name_and_query_suffix() {
        let icon = ToggleIcon::parse("expand-square.png?v=2").unwrap();
        assert_eq!(icon.src(), "expand-square.png");
        assert!(icon.shows_expand());
    }

    #[test]
    fn slashes_in_query_do_not_split_the_path() {
        let mut icon = ToggleIcon::parse("img/expand-square.png?p=a/b").unwrap();
        assert_eq!(icon.family(), IconFamily::Square);
        assert!(icon.shows_expand());
        icon.toggle();
        assert_eq!(icon.src(), "img/collapse-square.png");

        let icon = ToggleIcon::parse("img/collapse-circle.png#x/y").unwrap();
        assert_eq!(icon.src(), "img/collapse-circle.png");
    }

    #[test]
    fn unknown_images_are_rejected() {
        assert!(matches!(
            ToggleIcon::parse("images/logo.png"),
            Err(ReportError::UnknownIcon(_))
        ));
        // Substring matches are not enough.
        assert!(ToggleIcon::parse("images/my-expand-square.png").is_err());
    }
}
