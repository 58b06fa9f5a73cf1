use serde::Serialize;

use crate::geometry::Rect;

/// Height of the title bar drawn above every panel's content area.
pub const TITLE_BAR_HEIGHT: f32 = 26.0;

/// Default font size for title bar text.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Primitive kinds the graphics backend knows how to rasterize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawShape {
    Rect,
    Text,
    Image,
}

/// One backend-agnostic draw primitive. Colors are linear RGBA in
/// `0.0..=1.0`; `texture_id` is the opaque handle for `Image` commands.
#[derive(Debug, Clone, Serialize)]
pub struct DrawCommand {
    pub shape: DrawShape,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub font_size: f32,
    pub texture_id: u64,
}

/// Ordered list of draw commands for one frame. Order is paint order:
/// the backend draws index 0 first, so later commands overdraw earlier
/// ones.
#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn draw_rect(&mut self, rect: Rect, r: f32, g: f32, b: f32, a: f32) {
        self.commands.push(DrawCommand {
            shape: DrawShape::Rect,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            r,
            g,
            b,
            a,
            text: None,
            font_size: DEFAULT_FONT_SIZE,
            texture_id: 0,
        });
    }

    pub fn draw_text(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        font_size: f32,
        r: f32,
        g: f32,
        b: f32,
        a: f32,
    ) {
        self.commands.push(DrawCommand {
            shape: DrawShape::Text,
            x,
            y,
            width: 0.0,
            height: 0.0,
            r,
            g,
            b,
            a,
            text: Some(text.into()),
            font_size,
            texture_id: 0,
        });
    }

    pub fn draw_image(&mut self, rect: Rect, texture_id: u64) {
        self.commands.push(DrawCommand {
            shape: DrawShape::Image,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            r: 1.0,
            g: 1.0,
            b: 1.0,
            a: 1.0,
            text: None,
            font_size: DEFAULT_FONT_SIZE,
            texture_id,
        });
    }

    /// Background fill covering the panel's whole rect, drawn before the
    /// title bar and content.
    pub fn panel_background(&mut self, rect: Rect) {
        self.draw_rect(rect, 0.12, 0.12, 0.12, 1.0);
    }

    /// Title bar strip across the top of the panel rect plus the title
    /// text, inset 8px from the left and 5px from the top.
    pub fn panel_titlebar(&mut self, rect: Rect, title: &str) {
        let bar = Rect::new(rect.x, rect.y, rect.width, TITLE_BAR_HEIGHT);
        self.draw_rect(bar, 0.18, 0.18, 0.18, 1.0);
        self.draw_text(
            title,
            rect.x + 8.0,
            rect.y + 5.0,
            DEFAULT_FONT_SIZE,
            1.0,
            1.0,
            1.0,
            1.0,
        );
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Serialize the frame for capture tooling and golden tests.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.commands)
    }
}
