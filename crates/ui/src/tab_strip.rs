//! Ordered tab collection with a single active tab.

use crate::tab::Tab;

/// The window's tabs plus the active selection.
///
/// The strip never becomes empty: closing the last remaining tab is a
/// no-op. Closing the active tab activates its former right-hand
/// neighbor, or the new last tab when the active tab was rightmost.
pub struct TabStrip {
    /// Tabs in display order.
    tabs: Vec<Tab>,
    /// Index of the active tab.
    active: usize,
}

impl TabStrip {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: 0,
        }
    }

    /// Append a tab and make it active. Returns its index.
    pub fn add(&mut self, tab: Tab) -> usize {
        self.tabs.push(tab);
        self.active = self.tabs.len() - 1;
        self.active
    }

    /// Close the tab at `index`, keeping at least one tab open.
    pub fn close(&mut self, index: usize) {
        if self.tabs.len() <= 1 || index >= self.tabs.len() {
            return;
        }
        self.tabs.remove(index);
        // Removal shifts later tabs left. Keep the same tab selected when
        // one before it closed, and clamp when the last slot disappeared;
        // closing the active tab itself lands on its right neighbor.
        if index < self.active || self.active >= self.tabs.len() {
            self.active -= 1;
        }
    }

    /// Make the tab at `index` active, ignoring out-of-range indices.
    pub fn set_active(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active = index;
        }
    }

    /// Relabel the tab at `index`. Empty names leave the label unchanged.
    pub fn rename(&mut self, index: usize, name: &str) {
        if name.is_empty() {
            return;
        }
        if let Some(tab) = self.tabs.get_mut(index) {
            tab.set_label(name);
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.get(self.active)
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        self.tabs.get_mut(self.active)
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tab> {
        self.tabs.get_mut(index)
    }

    pub fn count(&self) -> usize {
        self.tabs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}
