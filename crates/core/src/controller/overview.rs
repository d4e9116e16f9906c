use wet_report_protocol::DomCommand;

use super::ReportController;
use crate::model::{OverviewTable, ToggleState};

impl ReportController {
    fn table_id(&self, table: OverviewTable) -> &str {
        match table {
            OverviewTable::Summary => &self.config.ids.summary_overview,
            OverviewTable::Detailed => &self.config.ids.detailed_overview,
        }
    }

    /// The overview table carrying element id `id`, if any.
    pub fn table_by_id(&self, id: &str) -> Option<OverviewTable> {
        [OverviewTable::Summary, OverviewTable::Detailed]
            .into_iter()
            .find(|&table| self.table_id(table) == id)
    }

    /// Show the overview table matching the trigger icon: an icon offering
    /// to expand selects the detailed table, one offering to collapse
    /// selects the summary.
    pub fn switch_overview(&mut self, trigger_id: &str) -> Vec<DomCommand> {
        match self.state.icon_state(trigger_id) {
            Some(ToggleState::Collapsed) => {
                self.switch_tables(OverviewTable::Summary, OverviewTable::Detailed, true)
            }
            Some(ToggleState::Expanded) => {
                self.switch_tables(OverviewTable::Detailed, OverviewTable::Summary, true)
            }
            None => {
                tracing::debug!("switch overview: no icon registered as {trigger_id:?}");
                Vec::new()
            }
        }
    }

    /// Hide `hide` and show `show`.
    ///
    /// Unless `force` is set this only happens while the global overview
    /// switcher offers to expand.
    pub fn switch_tables(
        &mut self,
        hide: OverviewTable,
        show: OverviewTable,
        force: bool,
    ) -> Vec<DomCommand> {
        if hide == show {
            return Vec::new();
        }
        let switcher = &self.config.ids.overview_switcher;
        if !force && self.state.icon_state(switcher) != Some(ToggleState::Collapsed) {
            return Vec::new();
        }

        self.state.overview = show;
        vec![
            DomCommand::SetDisplay {
                id: self.table_id(hide).to_string(),
                visible: false,
            },
            DomCommand::SetDisplay {
                id: self.table_id(show).to_string(),
                visible: true,
            },
        ]
    }
}
