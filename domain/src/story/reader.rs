//! Page cursor over a story

use super::entities::Story;

/// Tracks the page a reader is looking at.
///
/// Moving past either end clamps to the first or last page.
#[derive(Debug, Clone)]
pub struct StoryReader {
    story: Story,
    index: usize,
}

impl StoryReader {
    pub fn new(story: Story) -> Self {
        Self { story, index: 0 }
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    /// Zero-based index of the current page
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based page number for display
    pub fn page_number(&self) -> usize {
        self.index + 1
    }

    pub fn total_pages(&self) -> usize {
        self.story.page_count()
    }

    pub fn current_text(&self) -> &str {
        self.story.page(self.index).unwrap_or_default()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total_pages()
    }

    /// Advance one page. Returns `true` if the page changed.
    pub fn next(&mut self) -> bool {
        let last = self.total_pages().saturating_sub(1);
        let target = (self.index + 1).min(last);
        let moved = target != self.index;
        self.index = target;
        moved
    }

    /// Go back one page. Returns `true` if the page changed.
    pub fn prev(&mut self) -> bool {
        let target = self.index.saturating_sub(1);
        let moved = target != self.index;
        self.index = target;
        moved
    }
}
