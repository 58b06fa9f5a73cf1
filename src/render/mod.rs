//! Backend-agnostic UI rendering: a retained draw list and the renderer
//! that fills it from the solved layout each frame.

mod draw;
mod renderer;

pub use draw::{DEFAULT_FONT_SIZE, DrawCommand, DrawList, DrawShape, TITLE_BAR_HEIGHT};
pub use renderer::UiRenderer;
