//! Panel models and the panel registry.
//!
//! Panels are typed state bags owned by the [`PanelManager`]; they hold
//! no layout nodes. The docking engine materializes a slot node per
//! visible panel, and render/input code resolve panels by id.

mod browser;
mod console;
mod panel;
mod registry;
mod stats;
mod viewport;

pub use browser::{ResourceBrowserState, ResourceEntry};
pub use console::{ConsoleMessage, ConsoleSeverity, ConsoleState};
pub use panel::{Panel, PanelContent, PanelKind};
pub use registry::{DockSlot, PanelEntry, PanelManager};
pub use stats::{StatSample, StatSeries, StatisticsState};
pub use viewport::{CameraMode, ViewportState};
