//! Pointer input routing: hover tracking and click-to-focus.

use crate::layout::LayoutTree;
use crate::panel::{Panel, PanelManager};

/// Mouse button indices as delivered by the platform layer.
pub const MOUSE_BUTTON_LEFT: i32 = 0;
pub const MOUSE_BUTTON_RIGHT: i32 = 1;

/// Maps pointer coordinates onto the layout tree and resolves the hit to
/// a panel id.
///
/// The router owns only its own state; the tree and registry are passed
/// in per call. Hover follows the pointer (cleared when the hit node is
/// not a registered panel); focus is promoted from hover on a primary or
/// secondary press and is sticky until another press lands elsewhere.
#[derive(Debug, Default)]
pub struct InputRouter {
    hovered_panel_id: Option<String>,
    focused_panel_id: Option<String>,
    last_mouse: (f32, f32),
    left_down: bool,
    right_down: bool,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_mouse_move(&mut self, tree: &LayoutTree, panels: &PanelManager, x: f32, y: f32) {
        self.last_mouse = (x, y);
        self.update_hover(tree, panels, x, y);
    }

    pub fn on_mouse_button(&mut self, panels: &PanelManager, button: i32, pressed: bool) {
        match button {
            MOUSE_BUTTON_LEFT => {
                self.left_down = pressed;
                if pressed {
                    self.update_focus_from_hover(panels);
                }
            }
            MOUSE_BUTTON_RIGHT => {
                self.right_down = pressed;
                if pressed {
                    self.update_focus_from_hover(panels);
                }
            }
            _ => {}
        }
    }

    /// Routing point for per-panel scroll behaviour; no dispatch yet.
    pub fn on_scroll(&mut self, _delta_x: f32, _delta_y: f32) {}

    /// Routing point for keyboard dispatch to the focused panel; no
    /// dispatch yet.
    pub fn on_key(&mut self, _key: i32, _scancode: i32, _action: i32, _mods: i32) {}

    pub fn hovered_panel_id(&self) -> Option<&str> {
        self.hovered_panel_id.as_deref()
    }

    pub fn focused_panel_id(&self) -> Option<&str> {
        self.focused_panel_id.as_deref()
    }

    /// Resolve the hovered id through the registry; `None` when stale.
    pub fn hovered_panel<'a>(&self, panels: &'a PanelManager) -> Option<&'a Panel> {
        panels.find_panel(self.hovered_panel_id.as_deref()?)
    }

    /// Resolve the focused id through the registry; `None` when stale.
    pub fn focused_panel<'a>(&self, panels: &'a PanelManager) -> Option<&'a Panel> {
        panels.find_panel(self.focused_panel_id.as_deref()?)
    }

    pub fn last_mouse(&self) -> (f32, f32) {
        self.last_mouse
    }

    pub fn left_down(&self) -> bool {
        self.left_down
    }

    pub fn right_down(&self) -> bool {
        self.right_down
    }

    fn update_hover(&mut self, tree: &LayoutTree, panels: &PanelManager, x: f32, y: f32) {
        let hit_id = tree
            .hit_test(x, y)
            .and_then(|key| tree.node(key))
            .map(|node| node.id().to_string());

        self.hovered_panel_id = match hit_id {
            Some(id) if panels.find_panel(&id).is_some() => Some(id),
            _ => None,
        };
    }

    fn update_focus_from_hover(&mut self, panels: &PanelManager) {
        if let Some(id) = &self.hovered_panel_id {
            if panels.find_panel(id).is_some() {
                self.focused_panel_id = Some(id.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::layout::LayoutNode;
    use crate::panel::{DockSlot, Panel};

    fn fixture() -> (LayoutTree, PanelManager) {
        let mut tree = LayoutTree::new();
        let root = tree.insert(
            LayoutNode::new("root").with_local_rect(Rect::new(0.0, 0.0, 200.0, 100.0)),
        );
        let panel_node = tree.insert(
            LayoutNode::new("console").with_local_rect(Rect::new(0.0, 0.0, 100.0, 100.0)),
        );
        let chrome = tree.insert(
            LayoutNode::new("toolbar").with_local_rect(Rect::new(100.0, 0.0, 100.0, 100.0)),
        );
        tree.add_child(root, panel_node);
        tree.add_child(root, chrome);
        tree.set_root(Some(root));
        tree.update_layout(Rect::new(0.0, 0.0, 200.0, 100.0));

        let mut panels = PanelManager::new();
        panels.register_panel(Panel::console("console", "Console"), DockSlot::Left);
        (tree, panels)
    }

    #[test]
    fn hover_follows_pointer_onto_panel() {
        let (tree, panels) = fixture();
        let mut router = InputRouter::new();

        router.on_mouse_move(&tree, &panels, 50.0, 50.0);
        assert_eq!(router.hovered_panel_id(), Some("console"));

        // A node that is not a registered panel clears hover.
        router.on_mouse_move(&tree, &panels, 150.0, 50.0);
        assert_eq!(router.hovered_panel_id(), None);
    }

    #[test]
    fn press_promotes_hover_to_focus() {
        let (tree, panels) = fixture();
        let mut router = InputRouter::new();

        router.on_mouse_move(&tree, &panels, 50.0, 50.0);
        router.on_mouse_button(&panels, MOUSE_BUTTON_LEFT, true);

        assert_eq!(router.focused_panel_id(), Some("console"));
        assert_eq!(router.focused_panel(&panels).unwrap().id(), "console");
    }

    #[test]
    fn focus_is_sticky_across_hover_changes() {
        let (tree, panels) = fixture();
        let mut router = InputRouter::new();

        router.on_mouse_move(&tree, &panels, 50.0, 50.0);
        router.on_mouse_button(&panels, MOUSE_BUTTON_RIGHT, true);
        router.on_mouse_move(&tree, &panels, 150.0, 50.0);

        assert_eq!(router.hovered_panel_id(), None);
        assert_eq!(router.focused_panel_id(), Some("console"));
    }

    #[test]
    fn press_without_hover_keeps_focus() {
        let (tree, panels) = fixture();
        let mut router = InputRouter::new();

        router.on_mouse_move(&tree, &panels, 50.0, 50.0);
        router.on_mouse_button(&panels, MOUSE_BUTTON_LEFT, true);
        router.on_mouse_move(&tree, &panels, 150.0, 50.0);
        router.on_mouse_button(&panels, MOUSE_BUTTON_LEFT, true);

        assert_eq!(router.focused_panel_id(), Some("console"));
    }

    #[test]
    fn other_buttons_do_not_focus() {
        let (tree, panels) = fixture();
        let mut router = InputRouter::new();

        router.on_mouse_move(&tree, &panels, 50.0, 50.0);
        router.on_mouse_button(&panels, 2, true);

        assert_eq!(router.focused_panel_id(), None);
    }

    #[test]
    fn stale_focus_resolves_to_none() {
        let (tree, mut panels) = fixture();
        let mut router = InputRouter::new();

        router.on_mouse_move(&tree, &panels, 50.0, 50.0);
        router.on_mouse_button(&panels, MOUSE_BUTTON_LEFT, true);

        panels = PanelManager::new();
        assert!(router.focused_panel(&panels).is_none());
        assert_eq!(router.focused_panel_id(), Some("console"));
    }
}
