pub mod icon;
pub mod overlay;
pub mod state;

pub use icon::{IconFamily, ToggleIcon, ToggleState};
pub use overlay::PreviewOverlay;
pub use state::{IconSnapshot, OverviewTable, PageSnapshot, SectionSnapshot, ViewState};
