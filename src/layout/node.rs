use slotmap::new_key_type;

use crate::geometry::{Rect, Vec2};

new_key_type! {
    /// Generation-checked handle into the layout arena. Stale keys (from a
    /// freed subtree) simply stop resolving; every tree operation treats
    /// them as "no such node".
    pub struct NodeKey;
}

/// Which corner (or the center) of the parent a node's local rect is
/// measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

/// How a node positions its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Children keep their own local rects.
    #[default]
    Absolute,
    /// Children stacked top to bottom.
    Vertical,
    /// Children stacked left to right.
    Horizontal,
}

/// A node in the layout tree: identity, rects, anchor, child layout
/// policy, and arena links. Owned by the [`LayoutTree`] arena; parent and
/// children are stored as keys, never as references.
///
/// [`LayoutTree`]: super::LayoutTree
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub(super) id: String,
    pub(super) local: Rect,
    pub(super) global: Rect,
    pub(super) anchor: Anchor,
    pub(super) layout_mode: LayoutMode,
    pub(super) padding: Vec2,
    pub(super) visible: bool,
    pub(super) dirty: bool,
    pub(super) parent: Option<NodeKey>,
    pub(super) children: Vec<NodeKey>,
}

impl LayoutNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            local: Rect::default(),
            global: Rect::default(),
            anchor: Anchor::TopLeft,
            layout_mode: LayoutMode::Absolute,
            padding: Vec2::default(),
            visible: true,
            dirty: true,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_local_rect(mut self, rect: Rect) -> Self {
        self.local = rect;
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_layout_mode(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = mode;
        self
    }

    pub fn with_padding(mut self, padding: Vec2) -> Self {
        self.padding = padding;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn local_rect(&self) -> Rect {
        self.local
    }

    /// Valid only after a layout pass; see [`LayoutTree::update_layout`].
    ///
    /// [`LayoutTree::update_layout`]: super::LayoutTree::update_layout
    pub fn global_rect(&self) -> Rect {
        self.global
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn padding(&self) -> Vec2 {
        self.padding
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }
}
