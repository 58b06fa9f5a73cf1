/// One entry in the resource browser's current directory listing.
/// Paths are opaque strings owned by the host's asset scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub name: String,
    pub full_path: String,
    pub is_directory: bool,
}

/// State for the asset browser panel: a root/current path pair, the
/// current entry list, and a single selection tracked by full path so it
/// survives list refreshes.
#[derive(Debug, Clone, Default)]
pub struct ResourceBrowserState {
    root_path: String,
    current_path: String,
    entries: Vec<ResourceEntry>,
    selected_path: Option<String>,
    extension_filter: String,
}

impl ResourceBrowserState {
    pub fn set_root_path(&mut self, path: impl Into<String>) {
        self.root_path = path.into();
        if self.current_path.is_empty() {
            self.current_path = self.root_path.clone();
        }
    }

    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    pub fn set_current_path(&mut self, path: impl Into<String>) {
        self.current_path = path.into();
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Step to the parent directory, clamped at the root. Returns whether
    /// the current path changed.
    pub fn navigate_up(&mut self) -> bool {
        if self.current_path.is_empty() || self.current_path == self.root_path {
            return false;
        }

        let parent = match self.current_path.rfind(['/', '\\']) {
            Some(pos) => {
                let trimmed = &self.current_path[..pos];
                if trimmed.is_empty() {
                    self.root_path.clone()
                } else {
                    trimmed.to_string()
                }
            }
            None => self.root_path.clone(),
        };

        if parent == self.current_path {
            return false;
        }

        self.current_path = parent;
        true
    }

    /// Replace the listing. A selection whose path is no longer present
    /// is cleared.
    pub fn set_entries(&mut self, entries: Vec<ResourceEntry>) {
        self.entries = entries;

        if let Some(selected) = &self.selected_path {
            if !self.entries.iter().any(|e| &e.full_path == selected) {
                self.selected_path = None;
            }
        }
    }

    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear_selection(&mut self) {
        self.selected_path = None;
    }

    /// Select by list index (from UI hit testing). Out of range clears
    /// the selection.
    pub fn select_index(&mut self, index: usize) {
        match self.entries.get(index) {
            Some(entry) => self.selected_path = Some(entry.full_path.clone()),
            None => self.selected_path = None,
        }
    }

    pub fn is_selected_index(&self, index: usize) -> bool {
        match (self.entries.get(index), &self.selected_path) {
            (Some(entry), Some(selected)) => &entry.full_path == selected,
            _ => false,
        }
    }

    /// Select by path; only takes effect when the path exists in the
    /// current listing, otherwise the selection is cleared.
    pub fn select_path(&mut self, full_path: &str) {
        if self.entries.iter().any(|e| e.full_path == full_path) {
            self.selected_path = Some(full_path.to_string());
        } else {
            self.selected_path = None;
        }
    }

    pub fn is_selected_path(&self, full_path: &str) -> bool {
        self.selected_path.as_deref() == Some(full_path)
    }

    pub fn selected_entry(&self) -> Option<&ResourceEntry> {
        let selected = self.selected_path.as_deref()?;
        self.entries.iter().find(|e| e.full_path == selected)
    }

    /// Suffix filter such as ".png". Directories always pass so
    /// navigation stays possible.
    pub fn set_extension_filter(&mut self, extension: impl Into<String>) {
        self.extension_filter = extension.into();
    }

    pub fn extension_filter(&self) -> &str {
        &self.extension_filter
    }

    pub fn passes_filter(&self, entry: &ResourceEntry) -> bool {
        if entry.is_directory {
            return true;
        }
        if self.extension_filter.is_empty() {
            return true;
        }
        entry.full_path.ends_with(&self.extension_filter)
    }
}
