use crate::geometry::Rect;
use crate::layout::LayoutTree;
use crate::panel::{Panel, PanelKind, PanelManager};

use super::draw::{DrawList, TITLE_BAR_HEIGHT};

/// Walks the registry and emits panel chrome and content primitives into
/// a [`DrawList`].
///
/// The renderer reads the solved layout; it never mutates the tree or
/// the panels. Panels whose slot node is missing from the tree (hidden,
/// or docking not yet rebuilt) are skipped without error.
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn build_draw_list(&self, tree: &LayoutTree, panels: &PanelManager, list: &mut DrawList) {
        list.clear();

        for entry in panels.panels() {
            if !entry.visible {
                continue;
            }

            let Some(rect) = tree
                .find_by_id(entry.panel.id())
                .and_then(|key| tree.node(key))
                .map(|node| node.global_rect())
            else {
                continue;
            };

            self.draw_panel(&entry.panel, rect, list);
        }
    }

    fn draw_panel(&self, panel: &Panel, rect: Rect, list: &mut DrawList) {
        list.panel_background(rect);
        list.panel_titlebar(rect, panel.title());

        let content = Rect::new(
            rect.x,
            rect.y + TITLE_BAR_HEIGHT,
            rect.width,
            rect.height - TITLE_BAR_HEIGHT,
        );
        // A panel shorter than the title bar has no content area; chrome
        // only.
        if content.width <= 0.0 || content.height <= 0.0 {
            return;
        }

        match panel.kind() {
            PanelKind::Viewport => self.draw_viewport_content(panel, content, list),
            _ => list.draw_rect(content, 0.10, 0.10, 0.10, 1.0),
        }
    }

    /// The viewport gets a darker backdrop plus the scene texture when
    /// the backend has published one. Only called with a positive content
    /// area.
    fn draw_viewport_content(&self, panel: &Panel, content: Rect, list: &mut DrawList) {
        list.draw_rect(content, 0.05, 0.05, 0.05, 1.0);

        let texture_id = panel
            .viewport_state()
            .map(|state| state.render_texture_id())
            .unwrap_or(0);
        if texture_id != 0 {
            list.draw_image(content, texture_id);
        }
    }
}
