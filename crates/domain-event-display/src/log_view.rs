//! Bounded log panel
//!
//! The panel keeps at most `capacity` entries and evicts the oldest first.

use crate::font::Font;
use std::collections::VecDeque;

/// Maximum number of entries the panel shows by default
pub const DEFAULT_LIMIT: usize = 2000;

/// Text panel the plugin writes formatted lines into
pub trait LogView: Send {
    /// Append one entry, evicting the oldest ones beyond capacity
    fn append(&mut self, line: String);

    fn is_visible(&self) -> bool;

    fn font(&self) -> Font;

    fn set_font(&mut self, font: Font);

    fn clear(&mut self);
}

/// FIFO-bounded panel model
#[derive(Debug, Clone)]
pub struct BoundedLogView {
    lines: VecDeque<String>,
    capacity: usize,
    visible: bool,
    font: Font,
    /// Number of entries evicted since creation or the last clear
    evicted: usize,
}

impl BoundedLogView {
    /// Create a panel. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity.min(DEFAULT_LIMIT)),
            capacity,
            visible: true,
            font: Font::default(),
            evicted: 0,
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn evicted(&self) -> usize {
        self.evicted
    }

    /// Entries from oldest to newest
    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.lines.iter().map(String::as_str)
    }

    /// Owned copy of all entries, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

impl Default for BoundedLogView {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl LogView for BoundedLogView {
    fn append(&mut self, line: String) {
        self.lines.push_back(line);
        while self.lines.len() > self.capacity {
            self.lines.pop_front();
            self.evicted += 1;
        }
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn font(&self) -> Font {
        self.font.clone()
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.evicted = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontStyle;

    #[test]
    fn test_append_within_capacity() {
        let mut view = BoundedLogView::new(3);
        view.append("a".into());
        view.append("b".into());
        assert_eq!(view.lines().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(view.evicted(), 0);
    }

    #[test]
    fn test_evicts_oldest_beyond_capacity() {
        let capacity = 4;
        let mut view = BoundedLogView::new(capacity);
        for i in 0..=capacity {
            view.append(format!("line {i}"));
        }
        assert_eq!(view.len(), capacity);
        assert_eq!(
            view.lines().collect::<Vec<_>>(),
            vec!["line 1", "line 2", "line 3", "line 4"]
        );
        assert_eq!(view.evicted(), 1);
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut view = BoundedLogView::new(0);
        assert_eq!(view.capacity(), 1);
        view.append("a".into());
        view.append("b".into());
        assert_eq!(view.snapshot(), vec!["b".to_string()]);
    }

    #[test]
    fn test_default_limit() {
        let view = BoundedLogView::default();
        assert_eq!(view.capacity(), DEFAULT_LIMIT);
        assert!(view.is_visible());
        assert!(view.is_empty());
    }

    #[test]
    fn test_clear_resets_eviction_count() {
        let mut view = BoundedLogView::new(1);
        view.append("a".into());
        view.append("b".into());
        view.clear();
        assert!(view.is_empty());
        assert_eq!(view.evicted(), 0);
    }

    #[test]
    fn test_font_and_visibility() {
        let font = Font::new("Courier", FontStyle::Bold, 9);
        let mut view = BoundedLogView::new(10)
            .with_font(font.clone())
            .with_visible(false);
        assert_eq!(view.font(), font);
        assert!(!view.is_visible());
        view.set_visible(true);
        assert!(view.is_visible());
    }
}
