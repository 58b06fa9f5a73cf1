//! Geometric primitives shared by the layout, input, and render passes.
//!
//! Coordinates are in pixels with a top-left origin. Everything is `f32`
//! because the graphics backend consumes float vertex data; the layout
//! pass never rounds.

/// 2D offset, also used for per-axis padding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Point-in-rect test with inclusive edges, matching the hit-test
    /// contract (a point exactly on the right/bottom edge still hits).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }
}

/// Window or screen extent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_includes_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(40.0, 60.0));
        assert!(rect.contains(25.0, 35.0));
        assert!(!rect.contains(9.9, 30.0));
        assert!(!rect.contains(40.1, 30.0));
    }

    #[test]
    fn right_and_bottom() {
        let rect = Rect::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(rect.right(), 12.0);
        assert_eq!(rect.bottom(), 14.0);
    }
}
