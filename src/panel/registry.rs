use std::collections::HashMap;

use super::panel::Panel;

/// Declared placement intent for a panel. Top/Bottom/Floating are
/// accepted but currently placed like Center by the docking engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DockSlot {
    Left,
    Right,
    Top,
    Bottom,
    #[default]
    Center,
    Floating,
}

/// A registered panel plus its docking intent. The registry owns the
/// panel; the layout tree only ever refers to it by id.
#[derive(Debug)]
pub struct PanelEntry {
    pub panel: Panel,
    pub dock_slot: DockSlot,
    pub visible: bool,
}

/// Keyed, insertion-ordered collection of panels. Iteration order is
/// registration order, which the docking engine relies on for
/// deterministic placement. Every lookup is defensive: unknown ids are
/// no-ops or `None`, never panics.
#[derive(Debug, Default)]
pub struct PanelManager {
    entries: Vec<PanelEntry>,
    index_by_id: HashMap<String, usize>,
}

impl PanelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a panel under its id. Re-registering an existing id
    /// replaces the panel in place: position in the iteration order is
    /// preserved, the dock slot is updated, and visibility resets to
    /// true.
    pub fn register_panel(&mut self, panel: Panel, dock_slot: DockSlot) -> &mut Panel {
        let id = panel.id().to_string();

        if let Some(&index) = self.index_by_id.get(&id) {
            let entry = &mut self.entries[index];
            entry.panel = panel;
            entry.dock_slot = dock_slot;
            entry.visible = true;
            return &mut entry.panel;
        }

        self.entries.push(PanelEntry {
            panel,
            dock_slot,
            visible: true,
        });
        let index = self.entries.len() - 1;
        self.index_by_id.insert(id, index);
        &mut self.entries[index].panel
    }

    pub fn find_panel(&self, id: &str) -> Option<&Panel> {
        self.find_entry(id).map(|entry| &entry.panel)
    }

    pub fn find_panel_mut(&mut self, id: &str) -> Option<&mut Panel> {
        let index = *self.index_by_id.get(id)?;
        self.entries.get_mut(index).map(|entry| &mut entry.panel)
    }

    pub fn show_panel(&mut self, id: &str) {
        if let Some(entry) = self.find_entry_mut(id) {
            entry.visible = true;
        }
    }

    pub fn hide_panel(&mut self, id: &str) {
        if let Some(entry) = self.find_entry_mut(id) {
            entry.visible = false;
        }
    }

    pub fn toggle_panel(&mut self, id: &str) {
        if let Some(entry) = self.find_entry_mut(id) {
            entry.visible = !entry.visible;
        }
    }

    /// Unknown ids report as not visible.
    pub fn is_visible(&self, id: &str) -> bool {
        self.find_entry(id).map(|entry| entry.visible).unwrap_or(false)
    }

    pub fn set_dock_slot(&mut self, id: &str, slot: DockSlot) {
        if let Some(entry) = self.find_entry_mut(id) {
            entry.dock_slot = slot;
        }
    }

    /// Unknown ids report the default slot (Center).
    pub fn dock_slot(&self, id: &str) -> DockSlot {
        self.find_entry(id)
            .map(|entry| entry.dock_slot)
            .unwrap_or_default()
    }

    /// Full entry list in registration order, for the docking and render
    /// passes.
    pub fn panels(&self) -> &[PanelEntry] {
        &self.entries
    }

    pub fn panels_mut(&mut self) -> &mut [PanelEntry] {
        &mut self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find_entry(&self, id: &str) -> Option<&PanelEntry> {
        let index = *self.index_by_id.get(id)?;
        self.entries.get(index)
    }

    fn find_entry_mut(&mut self, id: &str) -> Option<&mut PanelEntry> {
        let index = *self.index_by_id.get(id)?;
        self.entries.get_mut(index)
    }
}
