//! Editor UI shell: owns the layout tree, panel registry, docking
//! engine, input router, and renderer, and exposes the small surface a
//! host window loop drives each frame.

use std::time::{Duration, Instant};

use crate::docking::{DOCK_CENTER, DOCK_LEFT, DOCK_RIGHT, DockingLayout};
use crate::geometry::{Rect, Size};
use crate::input::InputRouter;
use crate::layout::{LayoutMode, LayoutNode, LayoutTree};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::metrics::{MetricSnapshot, UiMetrics};
use crate::panel::{DockSlot, Panel, PanelManager};
use crate::render::{DrawList, UiRenderer};

const LOG_TARGET: &str = "dockyard::editor";

/// Fixed column split: left and right dock columns each take 22% of the
/// window width, the center takes the remaining 56%.
pub const DOCK_LEFT_FRACTION: f32 = 0.22;
pub const DOCK_CENTER_FRACTION: f32 = 0.56;
pub const DOCK_RIGHT_FRACTION: f32 = 0.22;

const ROOT_ID: &str = "root";

/// The composed editor UI. The host forwards window and input events and
/// consumes the draw list; everything in between (docking, layout,
/// panel state, rendering) lives here.
pub struct EditorUi {
    tree: LayoutTree,
    panels: PanelManager,
    docking: DockingLayout,
    input: InputRouter,
    renderer: UiRenderer,
    draw_list: DrawList,
    metrics: UiMetrics,
    logger: Option<Logger>,
    size: Size,
    started: Instant,
}

impl Default for EditorUi {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorUi {
    pub fn new() -> Self {
        Self {
            tree: LayoutTree::new(),
            panels: PanelManager::new(),
            docking: DockingLayout::new(),
            input: InputRouter::new(),
            renderer: UiRenderer::new(),
            draw_list: DrawList::new(),
            metrics: UiMetrics::new(),
            logger: None,
            size: Size::default(),
            started: Instant::now(),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Build the root/dock-region scaffolding for the given window size,
    /// register the default panels (console on the left, scene viewport
    /// in the center), and run the first docking and layout pass.
    ///
    /// Calling this again tears down the previous tree and starts over;
    /// registered panels survive because the registry is not rebuilt.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);

        self.build_scaffolding();

        if self.panels.is_empty() {
            self.panels
                .register_panel(Panel::console("console", "Console"), DockSlot::Left);
            self.panels.register_panel(
                Panel::viewport("viewport", "Viewport").with_closable(false),
                DockSlot::Center,
            );
        }

        self.rebuild_layout();

        self.log(
            LogLevel::Info,
            "ui_initialized",
            [
                json_kv("width", self.size.width),
                json_kv("height", self.size.height),
                json_kv("panels", self.panels.len()),
            ],
        );
    }

    /// Resize the window: re-proportion the dock columns and re-run
    /// docking and layout.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.size = Size::new(width, height);

        self.build_scaffolding();
        self.rebuild_layout();

        self.log(
            LogLevel::Debug,
            "resized",
            [json_kv("width", width), json_kv("height", height)],
        );
    }

    /// Re-place panels into the dock regions and solve the tree. Call
    /// after registering panels or changing visibility or dock slots.
    pub fn rebuild_layout(&mut self) {
        self.docking.rebuild(&mut self.tree, &self.panels);
        self.tree.update_layout(self.screen_rect());

        self.metrics.record_dock_rebuild();
        self.metrics.record_layout_pass();

        self.log(
            LogLevel::Trace,
            "layout_rebuilt",
            [json_kv("nodes", self.tree.node_count())],
        );
    }

    // Input forwarding -------------------------------------------------------

    pub fn on_mouse_move(&mut self, x: f32, y: f32) {
        self.input.on_mouse_move(&self.tree, &self.panels, x, y);
        self.metrics.record_input_event();
        self.mirror_interaction_flags();
    }

    pub fn on_mouse_button(&mut self, button: i32, pressed: bool) {
        self.input.on_mouse_button(&self.panels, button, pressed);
        self.metrics.record_input_event();
        self.mirror_interaction_flags();
    }

    pub fn on_scroll(&mut self, delta_x: f32, delta_y: f32) {
        self.input.on_scroll(delta_x, delta_y);
        self.metrics.record_input_event();
    }

    pub fn on_key(&mut self, key: i32, scancode: i32, action: i32, mods: i32) {
        self.input.on_key(key, scancode, action, mods);
        self.metrics.record_input_event();
    }

    // Rendering --------------------------------------------------------------

    /// Emit the current frame's draw commands into the owned draw list.
    pub fn build_draw_list(&mut self) {
        self.renderer
            .build_draw_list(&self.tree, &self.panels, &mut self.draw_list);
        self.metrics.record_draw_commands(self.draw_list.len());

        self.log(
            LogLevel::Trace,
            "draw_list_built",
            [json_kv("commands", self.draw_list.len())],
        );
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    // Panel management -------------------------------------------------------

    /// Register (or replace) a panel and immediately re-place it.
    pub fn register_panel(&mut self, panel: Panel, dock_slot: DockSlot) {
        let id = panel.id().to_string();
        self.panels.register_panel(panel, dock_slot);
        self.rebuild_layout();
        self.log(LogLevel::Debug, "panel_registered", [json_str("panel", id)]);
    }

    pub fn show_panel(&mut self, id: &str) {
        self.panels.show_panel(id);
        self.rebuild_layout();
    }

    pub fn hide_panel(&mut self, id: &str) {
        self.panels.hide_panel(id);
        self.rebuild_layout();
    }

    pub fn toggle_panel(&mut self, id: &str) {
        self.panels.toggle_panel(id);
        self.rebuild_layout();
    }

    // Accessors --------------------------------------------------------------

    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    pub fn panels(&self) -> &PanelManager {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut PanelManager {
        &mut self.panels
    }

    pub fn input(&self) -> &InputRouter {
        &self.input
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn metrics_snapshot(&self) -> MetricSnapshot {
        self.metrics.snapshot(self.uptime())
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    // Internals --------------------------------------------------------------

    /// (Re)create the root node and the three dock region columns sized
    /// for the current window. Panels are re-attached by the docking
    /// rebuild that follows.
    fn build_scaffolding(&mut self) {
        let root = self.tree.insert(
            LayoutNode::new(ROOT_ID)
                .with_local_rect(self.screen_rect())
                .with_layout_mode(LayoutMode::Horizontal),
        );

        for (id, fraction) in [
            (DOCK_LEFT, DOCK_LEFT_FRACTION),
            (DOCK_CENTER, DOCK_CENTER_FRACTION),
            (DOCK_RIGHT, DOCK_RIGHT_FRACTION),
        ] {
            let region = self.tree.insert(
                LayoutNode::new(id)
                    .with_local_rect(Rect::new(
                        0.0,
                        0.0,
                        self.size.width * fraction,
                        self.size.height,
                    ))
                    .with_layout_mode(LayoutMode::Vertical),
            );
            self.tree.add_child(root, region);
        }

        // Frees the previous scaffolding, if any.
        self.tree.set_root(Some(root));
        self.tree.update_layout(self.screen_rect());
    }

    fn screen_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size.width, self.size.height)
    }

    /// Copy the router's hover/focus resolution onto the panel flags so
    /// panel-local rendering and camera code can read them directly.
    fn mirror_interaction_flags(&mut self) {
        let hovered = self.input.hovered_panel_id().map(str::to_string);
        let focused = self.input.focused_panel_id().map(str::to_string);

        for entry in self.panels.panels_mut() {
            let id = entry.panel.id().to_string();
            entry.panel.set_hovered(hovered.as_deref() == Some(&id));
            entry.panel.set_focused(focused.as_deref() == Some(&id));

            if let Some(viewport) = entry.panel.viewport_state_mut() {
                viewport.set_has_focus(focused.as_deref() == Some(&id));
            }
        }
    }

    fn log(
        &self,
        level: LogLevel,
        message: &str,
        fields: impl IntoIterator<Item = (String, serde_json::Value)>,
    ) {
        if let Some(logger) = &self.logger {
            // Logging must never take the UI down.
            let _ = logger.log_event(event_with_fields(level, LOG_TARGET, message, fields));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 0.001, "{a} != {b}");
    }

    #[test]
    fn initialize_builds_dock_columns() {
        let mut ui = EditorUi::new();
        ui.initialize(1000.0, 600.0);

        let left = ui
            .tree()
            .node(ui.tree().find_by_id(DOCK_LEFT).unwrap())
            .unwrap()
            .global_rect();
        let center = ui
            .tree()
            .node(ui.tree().find_by_id(DOCK_CENTER).unwrap())
            .unwrap()
            .global_rect();
        let right = ui
            .tree()
            .node(ui.tree().find_by_id(DOCK_RIGHT).unwrap())
            .unwrap()
            .global_rect();

        assert_close(left.x, 0.0);
        assert_close(left.width, 220.0);
        assert_close(center.x, 220.0);
        assert_close(center.width, 560.0);
        assert_close(right.x, 780.0);
        assert_close(right.width, 220.0);
        assert_close(left.height, 600.0);
    }

    #[test]
    fn initialize_registers_default_panels() {
        let mut ui = EditorUi::new();
        ui.initialize(1000.0, 600.0);

        assert!(ui.panels().find_panel("console").is_some());
        let viewport = ui.panels().find_panel("viewport").unwrap();
        assert!(!viewport.closable());
        assert_eq!(ui.panels().dock_slot("viewport"), DockSlot::Center);
        assert!(ui.tree().find_by_id("console_layout_wrapper").is_some());
    }

    #[test]
    fn reinitialize_preserves_registered_panels() {
        let mut ui = EditorUi::new();
        ui.initialize(1000.0, 600.0);
        ui.register_panel(Panel::statistics("stats", "Stats"), DockSlot::Right);

        ui.initialize(800.0, 600.0);

        assert!(ui.panels().find_panel("stats").is_some());
        assert!(ui.tree().find_by_id("stats").is_some());
    }

    #[test]
    fn resize_reproportions_columns() {
        let mut ui = EditorUi::new();
        ui.initialize(1000.0, 600.0);
        ui.on_resize(500.0, 400.0);

        let center = ui
            .tree()
            .node(ui.tree().find_by_id(DOCK_CENTER).unwrap())
            .unwrap()
            .global_rect();
        assert_close(center.x, 110.0);
        assert_close(center.width, 280.0);
        assert_close(center.height, 400.0);
        assert_eq!(ui.size(), Size::new(500.0, 400.0));
    }

    #[test]
    fn click_focuses_panel_and_mirrors_flags() {
        let mut ui = EditorUi::new();
        ui.initialize(1000.0, 600.0);

        // Center column, inside the viewport slot (wrappers keep their
        // placeholder height, so stay near the top of the column).
        ui.on_mouse_move(500.0, 100.0);
        ui.on_mouse_button(0, true);

        assert_eq!(ui.input().focused_panel_id(), Some("viewport"));
        let viewport = ui.panels().find_panel("viewport").unwrap();
        assert!(viewport.focused());
        assert!(viewport.viewport_state().unwrap().has_focus());
        assert!(!ui.panels().find_panel("console").unwrap().focused());
    }

    #[test]
    fn hide_then_show_roundtrips_the_slot_node() {
        let mut ui = EditorUi::new();
        ui.initialize(1000.0, 600.0);

        ui.hide_panel("console");
        assert_eq!(ui.tree().find_by_id("console"), None);
        assert!(ui.panels().find_panel("console").is_some());

        ui.show_panel("console");
        assert!(ui.tree().find_by_id("console").is_some());
    }

    #[test]
    fn draw_list_covers_visible_panels() {
        let mut ui = EditorUi::new();
        ui.initialize(1000.0, 600.0);
        ui.build_draw_list();

        // Two panels, four commands each (background, bar, title, content).
        assert_eq!(ui.draw_list().len(), 8);

        ui.hide_panel("console");
        ui.build_draw_list();
        assert_eq!(ui.draw_list().len(), 4);
    }

    #[test]
    fn metrics_track_the_frame_loop() {
        let mut ui = EditorUi::new();
        ui.initialize(1000.0, 600.0);
        ui.on_mouse_move(10.0, 10.0);
        ui.build_draw_list();

        let snapshot = ui.metrics_snapshot();
        assert!(snapshot.dock_rebuilds >= 1);
        assert!(snapshot.layout_passes >= 1);
        assert_eq!(snapshot.input_events, 1);
        assert!(snapshot.draw_commands > 0);
    }
}
