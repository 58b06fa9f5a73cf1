/// Camera interaction modes for the 3D viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    #[default]
    None,
    Orbit,
    Freefly,
    Pan,
}

/// State for the scene viewport panel: pixel dimensions, camera
/// interaction, and the opaque render-target handle the graphics backend
/// blits into (0 = none).
#[derive(Debug, Clone, Default)]
pub struct ViewportState {
    width: u32,
    height: u32,
    size_changed: bool,
    camera_mode: CameraMode,
    interacting: bool,
    last_mouse: (f32, f32),
    has_focus: bool,
    render_texture_id: u64,
}

impl ViewportState {
    /// Record the viewport's pixel size. Sets the edge-triggered
    /// size-changed flag when the size actually differs; the host clears
    /// it with [`clear_size_flag`] once it has recreated its targets.
    ///
    /// [`clear_size_flag`]: Self::clear_size_flag
    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.size_changed = true;
        }
    }

    pub fn viewport_width(&self) -> u32 {
        self.width
    }

    pub fn viewport_height(&self) -> u32 {
        self.height
    }

    pub fn size_changed(&self) -> bool {
        self.size_changed
    }

    pub fn clear_size_flag(&mut self) {
        self.size_changed = false;
    }

    pub fn begin_interaction(&mut self, mode: CameraMode) {
        self.camera_mode = mode;
        self.interacting = mode != CameraMode::None;
    }

    pub fn end_interaction(&mut self) {
        self.camera_mode = CameraMode::None;
        self.interacting = false;
    }

    pub fn interaction_mode(&self) -> CameraMode {
        self.camera_mode
    }

    pub fn interacting(&self) -> bool {
        self.interacting
    }

    pub fn set_last_mouse(&mut self, x: f32, y: f32) {
        self.last_mouse = (x, y);
    }

    pub fn last_mouse(&self) -> (f32, f32) {
        self.last_mouse
    }

    pub fn set_has_focus(&mut self, focus: bool) {
        self.has_focus = focus;
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn set_render_texture_id(&mut self, id: u64) {
        self.render_texture_id = id;
    }

    pub fn render_texture_id(&self) -> u64 {
        self.render_texture_id
    }
}
