//! Log history with a re-applied word filter
//!
//! The buffer keeps every line it has been given. Each mutation rebuilds the
//! visible surface from the full history, so what `render()` returns is
//! always exactly what the filter rules produce for the current state.

/// A named, independently toggled substring filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntry {
    pub word: String,
    pub enabled: bool,
}

/// Append-only log store plus the filter state that drives the debug view
#[derive(Debug, Default)]
pub struct LogBuffer {
    messages: Vec<String>,
    filters: Vec<FilterEntry>,
    quick_filter: String,
    visible: Vec<String>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a line and refresh the visible surface
    pub fn append(&mut self, line: impl Into<String>) {
        self.messages.push(line.into());
        self.apply_filter();
    }

    /// Add a new filter entry, disabled. Blank input is ignored and
    /// duplicates are kept as separate entries.
    pub fn add_filter_word(&mut self, word: &str) {
        if word.trim().is_empty() {
            return;
        }
        self.filters.push(FilterEntry {
            word: word.to_string(),
            enabled: false,
        });
        self.apply_filter();
    }

    pub fn set_filter_enabled(&mut self, index: usize, enabled: bool) {
        let Some(entry) = self.filters.get_mut(index) else {
            return;
        };
        entry.enabled = enabled;
        self.apply_filter();
    }

    pub fn remove_filter(&mut self, index: usize) {
        if index < self.filters.len() {
            self.filters.remove(index);
            self.apply_filter();
        }
    }

    /// Free-text filter, only consulted while no filter entry is enabled
    pub fn set_quick_filter_text(&mut self, text: &str) {
        self.quick_filter = text.to_string();
        self.apply_filter();
    }

    /// Drop the history and the visible surface. Filter entries survive.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.visible.clear();
    }

    /// Lines currently visible, in insertion order
    pub fn render(&self) -> &[String] {
        &self.visible
    }

    pub fn filters(&self) -> &[FilterEntry] {
        &self.filters
    }

    pub fn quick_filter_text(&self) -> &str {
        &self.quick_filter
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn apply_filter(&mut self) {
        let active: Vec<String> = self
            .filters
            .iter()
            .filter(|f| f.enabled)
            .map(|f| f.word.to_lowercase())
            .collect();

        self.visible.clear();

        if !active.is_empty() {
            for message in &self.messages {
                let lower = message.to_lowercase();
                if active.iter().any(|word| lower.contains(word.as_str())) {
                    self.visible.push(message.clone());
                }
            }
        } else {
            let needle = self.quick_filter.to_lowercase();
            for message in &self.messages {
                if needle.is_empty() || message.to_lowercase().contains(&needle) {
                    self.visible.push(message.clone());
                }
            }
        }
    }
}
