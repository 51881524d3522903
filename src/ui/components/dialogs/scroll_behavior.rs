use ratatui::widgets::ScrollbarState;

/// Scroll position of a long dialog body
#[derive(Debug, Default, Clone)]
pub struct ScrollState {
    pub offset: usize,
    pub scrollbar: ScrollbarState,
}

impl ScrollState {
    pub fn up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
        self.scrollbar = self.scrollbar.position(self.offset);
    }

    pub fn down(&mut self) {
        self.offset = self.offset.saturating_add(1);
        self.scrollbar = self.scrollbar.position(self.offset);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clamp the offset to the content and return the visible window start
    pub fn clamp(&mut self, total_lines: usize, visible_height: usize) -> usize {
        let max_scroll = total_lines.saturating_sub(visible_height);
        self.offset = self.offset.min(max_scroll);
        self.scrollbar = self
            .scrollbar
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(self.offset);
        self.offset
    }
}
