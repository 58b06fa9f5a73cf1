use slotmap::SlotMap;

use crate::geometry::{Rect, Vec2};

use super::node::{Anchor, LayoutMode, LayoutNode, NodeKey};

/// Arena-backed layout tree.
///
/// Owns every [`LayoutNode`] and the optional root. Hierarchy is stored
/// as keys inside the arena, so rebuilding a subtree (as the docking
/// engine does every call) can never leave a dangling parent pointer:
/// keys into freed nodes stop resolving and all operations on them are
/// no-ops.
#[derive(Debug, Default)]
pub struct LayoutTree {
    nodes: SlotMap<NodeKey, LayoutNode>,
    root: Option<NodeKey>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detached node to the arena. Attach it with [`add_child`] or
    /// [`set_root`].
    ///
    /// [`add_child`]: Self::add_child
    /// [`set_root`]: Self::set_root
    pub fn insert(&mut self, node: LayoutNode) -> NodeKey {
        self.nodes.insert(node)
    }

    /// Replace the root. The previous root subtree (if any) is freed.
    /// `None` clears the tree.
    pub fn set_root(&mut self, root: Option<NodeKey>) {
        if let Some(old) = self.root.take() {
            if Some(old) != root {
                self.remove_subtree(old);
            }
        }
        self.root = root.filter(|key| self.nodes.contains_key(*key));
    }

    pub fn root(&self) -> Option<NodeKey> {
        self.root
    }

    pub fn node(&self, key: NodeKey) -> Option<&LayoutNode> {
        self.nodes.get(key)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Attach `child` under `parent` and mark the parent dirty. Stale
    /// keys and self-attachment are ignored.
    pub fn add_child(&mut self, parent: NodeKey, child: NodeKey) {
        if parent == child || !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return;
        }

        if let Some(old_parent) = self.nodes[child].parent {
            if let Some(node) = self.nodes.get_mut(old_parent) {
                node.children.retain(|key| *key != child);
            }
        }

        self.nodes[child].parent = Some(parent);
        let parent_node = &mut self.nodes[parent];
        parent_node.children.push(child);
        parent_node.dirty = true;
    }

    /// Free every child subtree of `parent`. The node itself stays.
    pub fn remove_children(&mut self, parent: NodeKey) {
        let Some(node) = self.nodes.get_mut(parent) else {
            return;
        };
        let children = std::mem::take(&mut node.children);
        node.dirty = true;
        for child in children {
            self.remove_subtree(child);
        }
    }

    fn remove_subtree(&mut self, key: NodeKey) {
        let Some(node) = self.nodes.remove(key) else {
            return;
        };
        for child in node.children {
            self.remove_subtree(child);
        }
    }

    // Mutators ---------------------------------------------------------------
    //
    // Each marks the node dirty so the next layout pass repositions it.
    // Visibility intentionally does not: a hidden subtree keeps its stale
    // rects and is skipped by layout and hit-testing alike.

    pub fn set_local_rect(&mut self, key: NodeKey, rect: Rect) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.local = rect;
            node.dirty = true;
        }
    }

    pub fn set_anchor(&mut self, key: NodeKey, anchor: Anchor) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.anchor = anchor;
            node.dirty = true;
        }
    }

    pub fn set_layout_mode(&mut self, key: NodeKey, mode: LayoutMode) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.layout_mode = mode;
            node.dirty = true;
        }
    }

    pub fn set_padding(&mut self, key: NodeKey, padding: Vec2) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.padding = padding;
            node.dirty = true;
        }
    }

    pub fn set_visible(&mut self, key: NodeKey, visible: bool) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.visible = visible;
        }
    }

    // Layout pass ------------------------------------------------------------

    /// Recompute global rects for the whole tree against `screen_rect`.
    /// No-op without a root.
    pub fn update_layout(&mut self, screen_rect: Rect) {
        if let Some(root) = self.root {
            self.layout_node(root, screen_rect);
        }
    }

    fn layout_node(&mut self, key: NodeKey, parent_rect: Rect) {
        let Some(node) = self.nodes.get(key) else {
            return;
        };
        if !node.visible {
            return;
        }

        self.resolve_global_rect(key, parent_rect);
        self.stack_children(key);

        let node = &self.nodes[key];
        let global = node.global;
        let children = node.children.clone();
        for child in children {
            self.layout_node(child, global);
        }

        self.nodes[key].dirty = false;
    }

    fn resolve_global_rect(&mut self, key: NodeKey, parent_rect: Rect) {
        let node = &mut self.nodes[key];

        // Clean and already sized: nothing moved this node since the last
        // pass, keep its rect.
        if !node.dirty && node.global.width != 0.0 && node.global.height != 0.0 {
            return;
        }

        let mut rect = node.local;
        match node.anchor {
            Anchor::TopLeft => {
                rect.x += parent_rect.x;
                rect.y += parent_rect.y;
            }
            Anchor::TopRight => {
                rect.x = parent_rect.x + parent_rect.width - rect.width - node.local.x;
                rect.y += parent_rect.y;
            }
            Anchor::BottomLeft => {
                rect.x += parent_rect.x;
                rect.y = parent_rect.y + parent_rect.height - rect.height - node.local.y;
            }
            Anchor::BottomRight => {
                rect.x = parent_rect.x + parent_rect.width - rect.width - node.local.x;
                rect.y = parent_rect.y + parent_rect.height - rect.height - node.local.y;
            }
            Anchor::Center => {
                rect.x = parent_rect.x + (parent_rect.width - rect.width) * 0.5 + node.local.x;
                rect.y = parent_rect.y + (parent_rect.height - rect.height) * 0.5 + node.local.y;
            }
        }

        node.global = rect;
    }

    /// Reposition children for Vertical/Horizontal modes: walk a cursor
    /// from the content origin, advance by each child's main-axis extent
    /// plus padding, and fill the cross axis with the parent's content
    /// extent. Absolute mode leaves children untouched.
    fn stack_children(&mut self, key: NodeKey) {
        let node = &self.nodes[key];
        if node.children.is_empty() || node.layout_mode == LayoutMode::Absolute {
            return;
        }

        let mode = node.layout_mode;
        let global = node.global;
        let padding = node.padding;
        let children = node.children.clone();

        let content_w = (global.width - padding.x * 2.0).max(0.0);
        let content_h = (global.height - padding.y * 2.0).max(0.0);

        let mut cursor_x = global.x + padding.x;
        let mut cursor_y = global.y + padding.y;

        for child_key in children {
            let Some(child) = self.nodes.get_mut(child_key) else {
                continue;
            };

            match mode {
                LayoutMode::Vertical => {
                    child.local.x = padding.x;
                    child.local.y = cursor_y - global.y;
                    child.local.width = content_w;
                    cursor_y += child.local.height + padding.y;
                }
                LayoutMode::Horizontal => {
                    child.local.x = cursor_x - global.x;
                    child.local.y = padding.y;
                    child.local.height = content_h;
                    cursor_x += child.local.width + padding.x;
                }
                LayoutMode::Absolute => unreachable!(),
            }

            child.dirty = true;
        }
    }

    // Queries ----------------------------------------------------------------

    /// Depth-first pre-order search; first match wins. Ids are not
    /// globally enforced unique.
    pub fn find_by_id(&self, id: &str) -> Option<NodeKey> {
        self.root.and_then(|root| self.find_in(root, id))
    }

    fn find_in(&self, key: NodeKey, id: &str) -> Option<NodeKey> {
        let node = self.nodes.get(key)?;
        if node.id == id {
            return Some(key);
        }
        for child in &node.children {
            if let Some(found) = self.find_in(*child, id) {
                return Some(found);
            }
        }
        None
    }

    /// Deepest visible node containing the point. Children are tested in
    /// list order and the last hit wins, so later siblings take priority
    /// on overlap; a node only claims the point itself when no child does.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<NodeKey> {
        self.root.and_then(|root| self.hit_test_in(root, x, y))
    }

    fn hit_test_in(&self, key: NodeKey, x: f32, y: f32) -> Option<NodeKey> {
        let node = self.nodes.get(key)?;
        if !node.visible || !node.global.contains(x, y) {
            return None;
        }

        let mut best = None;
        for child in &node.children {
            if let Some(hit) = self.hit_test_in(*child, x, y) {
                best = Some(hit);
            }
        }

        best.or(Some(key))
    }
}
