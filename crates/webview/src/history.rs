//! Engine-side navigation history.

/// Bounded back/forward history for one web view.
pub struct NavigationHistory {
    /// Visited addresses, oldest first.
    entries: Vec<String>,
    /// Index of the current entry, -1 before the first load.
    current: isize,
    /// Maximum number of retained entries.
    max_size: usize,
}

impl NavigationHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            current: -1,
            max_size: 50,
        }
    }

    /// Record a new entry, dropping any forward entries.
    pub fn push(&mut self, url: String) {
        if self.current >= 0 {
            self.entries.truncate((self.current + 1) as usize);
        }

        self.entries.push(url);
        self.current = (self.entries.len() - 1) as isize;

        if self.entries.len() > self.max_size {
            self.entries.remove(0);
            self.current -= 1;
        }
    }

    /// Step back and return the new current entry.
    pub fn go_back(&mut self) -> Option<&str> {
        if self.current > 0 {
            self.current -= 1;
            self.entries.get(self.current as usize).map(String::as_str)
        } else {
            None
        }
    }

    /// Step forward and return the new current entry.
    pub fn go_forward(&mut self) -> Option<&str> {
        if (self.current as usize) < self.entries.len().saturating_sub(1) {
            self.current += 1;
            self.entries.get(self.current as usize).map(String::as_str)
        } else {
            None
        }
    }

    /// Whether a back entry exists.
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Whether a forward entry exists.
    pub fn can_go_forward(&self) -> bool {
        (self.current as usize) < self.entries.len().saturating_sub(1)
    }

    /// The current entry, if any.
    pub fn current(&self) -> Option<&str> {
        if self.current >= 0 {
            self.entries.get(self.current as usize).map(String::as_str)
        } else {
            None
        }
    }

    /// All retained entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new()
    }
}
