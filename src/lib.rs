//! Retained-mode composition layer for an editor shell: an anchored
//! layout tree, dockable panels with typed content, a deterministic
//! docking engine, pointer routing, and a backend-agnostic draw list.
//!
//! [`EditorUi`] is the usual entry point; the individual pieces are
//! exposed for hosts that compose their own shell.

pub mod docking;
pub mod editor;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod panel;
pub mod render;

pub use docking::{DOCK_CENTER, DOCK_LEFT, DOCK_RIGHT, DockingLayout};
pub use editor::{
    DOCK_CENTER_FRACTION, DOCK_LEFT_FRACTION, DOCK_RIGHT_FRACTION, EditorUi,
};
pub use geometry::{Rect, Size, Vec2};
pub use input::{InputRouter, MOUSE_BUTTON_LEFT, MOUSE_BUTTON_RIGHT};
pub use layout::{Anchor, LayoutMode, LayoutNode, LayoutTree, NodeKey};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
};
pub use metrics::{MetricSnapshot, UiMetrics};
pub use panel::{
    CameraMode, ConsoleMessage, ConsoleSeverity, ConsoleState, DockSlot, Panel, PanelContent,
    PanelEntry, PanelKind, PanelManager, ResourceBrowserState, ResourceEntry, StatSample,
    StatSeries, StatisticsState, ViewportState,
};
pub use render::{
    DEFAULT_FONT_SIZE, DrawCommand, DrawList, DrawShape, TITLE_BAR_HEIGHT, UiRenderer,
};
