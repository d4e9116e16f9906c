use wet_report_protocol::{DomCommand, ElementRef};

use super::ReportController;

impl ReportController {
    /// Un-hide successful rows; only the "hide successful" control stays visible.
    ///
    /// A no-op while the rows are already shown.
    pub fn show_all_rows(&mut self) -> Vec<DomCommand> {
        if !self.state.successful_hidden {
            return Vec::new();
        }
        self.state.successful_hidden = false;
        let ids = &self.config.ids;
        vec![
            DomCommand::RemoveClass {
                target: ElementRef::class(&ids.successful_class),
                class: ids.hidden_class.clone(),
            },
            DomCommand::RemoveClass {
                target: ElementRef::id(&ids.hide_successful),
                class: ids.hidden_class.clone(),
            },
            DomCommand::AddClass {
                target: ElementRef::id(&ids.show_all),
                class: ids.hidden_class.clone(),
            },
        ]
    }

    /// Hide successful rows; only the "show all" control stays visible.
    pub fn hide_successful_rows(&mut self) -> Vec<DomCommand> {
        if self.state.successful_hidden {
            return Vec::new();
        }
        self.state.successful_hidden = true;
        let ids = &self.config.ids;
        vec![
            DomCommand::AddClass {
                target: ElementRef::class(&ids.successful_class),
                class: ids.hidden_class.clone(),
            },
            DomCommand::AddClass {
                target: ElementRef::id(&ids.hide_successful),
                class: ids.hidden_class.clone(),
            },
            DomCommand::RemoveClass {
                target: ElementRef::id(&ids.show_all),
                class: ids.hidden_class.clone(),
            },
        ]
    }
}
