//! Layout tree: anchored rectangles, stacking containers, hit-testing.
//!
//! Downstream code imports layout types from here while the
//! implementation details live in the private submodules.

mod node;
mod tree;

pub use node::{Anchor, LayoutMode, LayoutNode, NodeKey};
pub use tree::LayoutTree;
