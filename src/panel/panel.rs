use super::browser::ResourceBrowserState;
use super::console::ConsoleState;
use super::stats::StatisticsState;
use super::viewport::ViewportState;

/// Discriminant for panel-specific behaviour (render specialization,
/// input routing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Generic,
    Console,
    Viewport,
    ResourceBrowser,
    Statistics,
}

/// Closed set of panel payloads. The renderer and host tooling switch on
/// this instead of downcasting.
#[derive(Debug, Clone, Default)]
pub enum PanelContent {
    #[default]
    Generic,
    Console(ConsoleState),
    Viewport(ViewportState),
    ResourceBrowser(ResourceBrowserState),
    Statistics(StatisticsState),
}

/// A dockable editor panel: identity, chrome flags, interaction flags,
/// and kind-specific content.
///
/// A panel is not a layout node. It is placed into the tree by the
/// docking engine under a slot node carrying the panel's id, and render
/// and input code resolve that id per frame.
#[derive(Debug, Clone)]
pub struct Panel {
    id: String,
    title: String,
    content: PanelContent,
    closable: bool,
    movable: bool,
    focused: bool,
    hovered: bool,
}

impl Panel {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: PanelContent) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content,
            closable: true,
            movable: true,
            focused: false,
            hovered: false,
        }
    }

    pub fn generic(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(id, title, PanelContent::Generic)
    }

    pub fn console(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(id, title, PanelContent::Console(ConsoleState::default()))
    }

    pub fn viewport(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(id, title, PanelContent::Viewport(ViewportState::default()))
    }

    pub fn resource_browser(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(
            id,
            title,
            PanelContent::ResourceBrowser(ResourceBrowserState::default()),
        )
    }

    pub fn statistics(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(id, title, PanelContent::Statistics(StatisticsState::default()))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn kind(&self) -> PanelKind {
        match self.content {
            PanelContent::Generic => PanelKind::Generic,
            PanelContent::Console(_) => PanelKind::Console,
            PanelContent::Viewport(_) => PanelKind::Viewport,
            PanelContent::ResourceBrowser(_) => PanelKind::ResourceBrowser,
            PanelContent::Statistics(_) => PanelKind::Statistics,
        }
    }

    pub fn content(&self) -> &PanelContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut PanelContent {
        &mut self.content
    }

    pub fn with_closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    pub fn with_movable(mut self, movable: bool) -> Self {
        self.movable = movable;
        self
    }

    pub fn closable(&self) -> bool {
        self.closable
    }

    pub fn movable(&self) -> bool {
        self.movable
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    // Typed content accessors. Named apart from the constructors above
    // (`Panel::console` builds, `panel.console_state()` reads).

    pub fn console_state(&self) -> Option<&ConsoleState> {
        match &self.content {
            PanelContent::Console(state) => Some(state),
            _ => None,
        }
    }

    pub fn console_state_mut(&mut self) -> Option<&mut ConsoleState> {
        match &mut self.content {
            PanelContent::Console(state) => Some(state),
            _ => None,
        }
    }

    pub fn viewport_state(&self) -> Option<&ViewportState> {
        match &self.content {
            PanelContent::Viewport(state) => Some(state),
            _ => None,
        }
    }

    pub fn viewport_state_mut(&mut self) -> Option<&mut ViewportState> {
        match &mut self.content {
            PanelContent::Viewport(state) => Some(state),
            _ => None,
        }
    }

    pub fn resource_browser_state(&self) -> Option<&ResourceBrowserState> {
        match &self.content {
            PanelContent::ResourceBrowser(state) => Some(state),
            _ => None,
        }
    }

    pub fn resource_browser_state_mut(&mut self) -> Option<&mut ResourceBrowserState> {
        match &mut self.content {
            PanelContent::ResourceBrowser(state) => Some(state),
            _ => None,
        }
    }

    pub fn statistics_state(&self) -> Option<&StatisticsState> {
        match &self.content {
            PanelContent::Statistics(state) => Some(state),
            _ => None,
        }
    }

    pub fn statistics_state_mut(&mut self) -> Option<&mut StatisticsState> {
        match &mut self.content {
            PanelContent::Statistics(state) => Some(state),
            _ => None,
        }
    }
}
