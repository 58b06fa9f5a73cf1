//! Deterministic placement of panels into the three fixed dock regions.

use crate::geometry::Rect;
use crate::layout::{Anchor, LayoutMode, LayoutNode, LayoutTree};
use crate::panel::{DockSlot, PanelManager};

/// Well-known region ids. The editor facade creates these once under the
/// root at initialization; the docking engine only ever replaces their
/// children.
pub const DOCK_LEFT: &str = "dock_left";
pub const DOCK_CENTER: &str = "dock_center";
pub const DOCK_RIGHT: &str = "dock_right";

/// Placeholder extent for freshly placed wrappers; the layout pass that
/// follows every rebuild provides the real sizing.
const WRAPPER_RECT: Rect = Rect::new(0.0, 0.0, 300.0, 200.0);

/// Rebuilds the wrapper/slot nodes under the dock regions from the
/// registry's current state.
///
/// Stateless and idempotent: every call clears all three regions and
/// re-places every visible panel in registration order, so it is safe to
/// call after any panel registration, visibility toggle, or dock-slot
/// change.
#[derive(Debug, Default)]
pub struct DockingLayout;

impl DockingLayout {
    pub fn new() -> Self {
        Self
    }

    /// Re-place all visible panels. A no-op until the tree contains all
    /// three dock regions (editor not yet initialized).
    pub fn rebuild(&self, tree: &mut LayoutTree, panels: &PanelManager) {
        let (Some(left), Some(center), Some(right)) = (
            tree.find_by_id(DOCK_LEFT),
            tree.find_by_id(DOCK_CENTER),
            tree.find_by_id(DOCK_RIGHT),
        ) else {
            return;
        };

        tree.remove_children(left);
        tree.remove_children(center);
        tree.remove_children(right);

        for entry in panels.panels() {
            if !entry.visible {
                continue;
            }

            let region = match entry.dock_slot {
                DockSlot::Left => left,
                DockSlot::Center => center,
                DockSlot::Right => right,
                // Placeholder: these slots have no dedicated region yet
                // and fall back to the center.
                DockSlot::Top | DockSlot::Bottom | DockSlot::Floating => center,
            };

            Self::attach_panel_slot(tree, region, entry.panel.id());
        }

        // Wrapper/slot nodes are fresh; lay the whole tree out against
        // the root's current extent.
        if let Some(root_rect) = tree.root().and_then(|r| tree.node(r)).map(|n| n.global_rect())
        {
            tree.update_layout(root_rect);
        }
    }

    fn attach_panel_slot(tree: &mut LayoutTree, region: crate::layout::NodeKey, panel_id: &str) {
        let wrapper = tree.insert(
            LayoutNode::new(format!("{panel_id}_layout_wrapper"))
                .with_local_rect(WRAPPER_RECT)
                .with_layout_mode(LayoutMode::Vertical),
        );

        let slot = tree.insert(
            LayoutNode::new(panel_id)
                .with_local_rect(WRAPPER_RECT)
                .with_anchor(Anchor::TopLeft),
        );

        tree.add_child(wrapper, slot);
        tree.add_child(region, wrapper);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Panel;

    fn dock_tree(width: f32, height: f32) -> LayoutTree {
        let mut tree = LayoutTree::new();
        let root = tree.insert(
            LayoutNode::new("root")
                .with_local_rect(Rect::new(0.0, 0.0, width, height))
                .with_layout_mode(LayoutMode::Horizontal),
        );
        for id in [DOCK_LEFT, DOCK_CENTER, DOCK_RIGHT] {
            let dock = tree.insert(
                LayoutNode::new(id)
                    .with_local_rect(Rect::new(0.0, 0.0, width / 3.0, height))
                    .with_layout_mode(LayoutMode::Vertical),
            );
            tree.add_child(root, dock);
        }
        tree.set_root(Some(root));
        tree.update_layout(Rect::new(0.0, 0.0, width, height));
        tree
    }

    fn rects_by_id(tree: &LayoutTree, ids: &[&str]) -> Vec<(String, Rect)> {
        ids.iter()
            .filter_map(|id| {
                tree.find_by_id(id)
                    .and_then(|k| tree.node(k))
                    .map(|n| (id.to_string(), n.global_rect()))
            })
            .collect()
    }

    #[test]
    fn rebuild_without_regions_is_noop() {
        let mut tree = LayoutTree::new();
        let root = tree.insert(LayoutNode::new("root"));
        tree.set_root(Some(root));

        let mut panels = PanelManager::new();
        panels.register_panel(Panel::console("console", "Console"), DockSlot::Left);

        DockingLayout::new().rebuild(&mut tree, &panels);
        assert_eq!(tree.find_by_id("console"), None);
    }

    #[test]
    fn visible_panels_get_wrapper_and_slot() {
        let mut tree = dock_tree(900.0, 600.0);
        let mut panels = PanelManager::new();
        panels.register_panel(Panel::console("console", "Console"), DockSlot::Left);
        panels.register_panel(Panel::viewport("viewport", "Viewport"), DockSlot::Center);

        DockingLayout::new().rebuild(&mut tree, &panels);

        assert!(tree.find_by_id("console_layout_wrapper").is_some());
        assert!(tree.find_by_id("console").is_some());
        assert!(tree.find_by_id("viewport_layout_wrapper").is_some());
        assert!(tree.find_by_id("viewport").is_some());
    }

    #[test]
    fn hidden_panels_are_skipped() {
        let mut tree = dock_tree(900.0, 600.0);
        let mut panels = PanelManager::new();
        panels.register_panel(Panel::console("console", "Console"), DockSlot::Left);
        panels.hide_panel("console");

        DockingLayout::new().rebuild(&mut tree, &panels);

        assert_eq!(tree.find_by_id("console"), None);
        assert!(panels.find_panel("console").is_some());
    }

    #[test]
    fn unimplemented_slots_fall_back_to_center() {
        let mut tree = dock_tree(900.0, 600.0);
        let mut panels = PanelManager::new();
        panels.register_panel(Panel::generic("float", "Float"), DockSlot::Floating);
        panels.register_panel(Panel::generic("top", "Top"), DockSlot::Top);

        DockingLayout::new().rebuild(&mut tree, &panels);

        let center = tree.find_by_id(DOCK_CENTER).unwrap();
        assert_eq!(tree.node(center).unwrap().children().len(), 2);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mut tree = dock_tree(900.0, 600.0);
        let mut panels = PanelManager::new();
        panels.register_panel(Panel::console("console", "Console"), DockSlot::Left);
        panels.register_panel(Panel::viewport("viewport", "Viewport"), DockSlot::Center);
        panels.register_panel(Panel::statistics("stats", "Stats"), DockSlot::Right);

        let docking = DockingLayout::new();
        let ids = [
            "console_layout_wrapper",
            "console",
            "viewport_layout_wrapper",
            "viewport",
            "stats_layout_wrapper",
            "stats",
        ];

        docking.rebuild(&mut tree, &panels);
        tree.update_layout(Rect::new(0.0, 0.0, 900.0, 600.0));
        let first = rects_by_id(&tree, &ids);
        let count_first = tree.node_count();

        docking.rebuild(&mut tree, &panels);
        tree.update_layout(Rect::new(0.0, 0.0, 900.0, 600.0));
        let second = rects_by_id(&tree, &ids);

        assert_eq!(first.len(), ids.len());
        assert_eq!(first, second);
        assert_eq!(count_first, tree.node_count());
    }

    #[test]
    fn placement_follows_registration_order() {
        let mut tree = dock_tree(900.0, 600.0);
        let mut panels = PanelManager::new();
        panels.register_panel(Panel::generic("first", "First"), DockSlot::Left);
        panels.register_panel(Panel::generic("second", "Second"), DockSlot::Left);

        DockingLayout::new().rebuild(&mut tree, &panels);
        tree.update_layout(Rect::new(0.0, 0.0, 900.0, 600.0));

        let first_rect = tree
            .node(tree.find_by_id("first").unwrap())
            .unwrap()
            .global_rect();
        let second_rect = tree
            .node(tree.find_by_id("second").unwrap())
            .unwrap()
            .global_rect();
        assert!(second_rect.y > first_rect.y);
    }
}
