use wet_report_protocol::DomCommand;

use super::ReportController;
use crate::model::{ToggleIcon, ToggleState};

impl ReportController {
    /// Swap a toggle icon to its sibling image.
    ///
    /// Returns whether the governed section is now collapsed together with
    /// the image update, or `None` when `icon_id` is not a registered icon.
    pub fn toggle(&mut self, icon_id: &str) -> Option<(bool, DomCommand)> {
        let Some(icon) = self.state.icons.get_mut(icon_id) else {
            tracing::debug!("toggle: no icon registered as {icon_id:?}");
            return None;
        };
        let collapsed = icon.toggle().is_collapsed();
        tracing::trace!(icon_id, family = ?icon.family(), collapsed, "toggled icon");
        Some((
            collapsed,
            DomCommand::SetImageSource {
                id: icon_id.to_string(),
                src: icon.src(),
            },
        ))
    }

    pub fn set_section_visibility(&mut self, section_id: &str, collapsed: bool) -> Vec<DomCommand> {
        self.state
            .sections
            .insert(section_id.to_string(), !collapsed);
        vec![DomCommand::SetDisplay {
            id: section_id.to_string(),
            visible: !collapsed,
        }]
    }

    pub fn toggle_section(&mut self, icon_id: &str, section_id: &str) -> Vec<DomCommand> {
        let Some((collapsed, icon_cmd)) = self.toggle(icon_id) else {
            return Vec::new();
        };
        let mut commands = vec![icon_cmd];
        commands.extend(self.set_section_visibility(section_id, collapsed));
        commands
    }

    /// Toggle `trigger_id` and bring every `(icon, section)` pair in line
    /// with its new state.
    pub fn toggle_all_sections<S: AsRef<str>>(
        &mut self,
        trigger_id: &str,
        pairs: &[(S, S)],
    ) -> Vec<DomCommand> {
        let Some((collapsed, trigger_cmd)) = self.toggle(trigger_id) else {
            return Vec::new();
        };
        let mut commands = vec![trigger_cmd];
        commands.extend(self.apply_all_sections(ToggleState::from_collapsed(collapsed), pairs));
        commands
    }

    /// Toggle each pair whose icon state differs from `target`.
    ///
    /// Pairs already in the target state and pairs with unregistered icons
    /// are left alone, so applying the same target twice is a no-op the
    /// second time.
    pub fn apply_all_sections<S: AsRef<str>>(
        &mut self,
        target: ToggleState,
        pairs: &[(S, S)],
    ) -> Vec<DomCommand> {
        let mut commands = Vec::new();
        for (icon_id, section_id) in pairs {
            let icon_id = icon_id.as_ref();
            match self.state.icon_state(icon_id) {
                Some(state) if state != target => {
                    commands.extend(self.toggle_section(icon_id, section_id.as_ref()));
                }
                Some(_) => {}
                None => tracing::debug!("toggle all: skipping unknown icon {icon_id:?}"),
            }
        }
        tracing::trace!(count = commands.len(), "toggle all commands");
        commands
    }

    /// Make sure `section_id` is expanded, e.g. before scrolling to it.
    pub fn reveal_section(&mut self, section_id: &str) -> Vec<DomCommand> {
        let icon_id = self.config.ids.section_icon(section_id);
        let collapsed = self
            .state
            .icons
            .get(&icon_id)
            .is_some_and(ToggleIcon::shows_expand);
        if collapsed {
            self.toggle_section(&icon_id, section_id)
        } else {
            Vec::new()
        }
    }
}
