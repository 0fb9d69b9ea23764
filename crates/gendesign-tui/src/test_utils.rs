//! Test utilities for TUI rendering verification
//!
//! Widgets and full frames render into ratatui's `TestBackend`, so
//! assertions run against the cell buffer without a real terminal.
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.render_widget(MainHeader::new(), term.area());
//! assert!(term.buffer_contains("Perangkat Lunak Desain Generatif"));
//! ```

use gendesign_app::state::AppState;
use gendesign_app::AppearanceStore;
use gendesign_gen::test_utils::test_designs;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing narrow layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// 40x12
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `term.draw_with(|f| view(f, &state))`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Text appears anywhere in the buffer (within a single row)
    pub fn buffer_contains(&self, text: &str) -> bool {
        (0..self.buffer().area.height).any(|y| self.line_contains(y, text))
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    /// Cell position of the first `text` occurrence, scanning rows top-down
    pub fn find(&self, text: &str) -> Option<(u16, u16)> {
        let buffer = self.buffer();
        for y in 0..buffer.area.height {
            let mut row = String::new();
            let mut starts = Vec::with_capacity(usize::from(buffer.area.width));
            for x in 0..buffer.area.width {
                starts.push(row.len());
                row.push_str(buffer[(x, y)].symbol());
            }
            if let Some(byte) = row.find(text) {
                let x = starts.iter().rposition(|&start| start <= byte)?;
                return Some((x as u16, y));
            }
        }
        None
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(buffer[(x, y)].symbol())
        } else {
            None
        }
    }

    /// Whole buffer as text, one line per row (for debugging)
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| line_content(buffer, y) + "\n")
            .collect()
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    if line >= buffer.area.height {
        return String::new();
    }
    (0..buffer.area.width)
        .map(|x| buffer[(x, line)].symbol())
        .collect()
}

/// Fresh state with an in-memory appearance store
pub fn create_test_state() -> AppState {
    AppState::new(AppearanceStore::in_memory())
}

/// State showing the four fixture designs
pub fn create_state_with_results() -> AppState {
    let mut state = create_test_state();
    if let Some(id) = state.results.begin_request() {
        state
            .results
            .complete(id, test_designs(), &AppearanceStore::in_memory());
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_sizes() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, 80, 24));
        assert_eq!(TestTerminal::compact().area(), Rect::new(0, 0, 40, 12));
    }

    #[test]
    fn test_buffer_queries() {
        let mut term = TestTerminal::with_size(20, 3);
        term.render_widget(Paragraph::new("\n  halo dunia"), term.area());

        assert!(term.buffer_contains("halo dunia"));
        assert!(term.line_contains(1, "halo"));
        assert!(!term.line_contains(0, "halo"));
        assert_eq!(term.find("dunia"), Some((7, 1)));
        assert_eq!(term.cell_at(2, 1), Some("h"));
        assert_eq!(term.cell_at(50, 1), None);
        assert!(term.find("tidak ada").is_none());
    }

    #[test]
    fn test_find_counts_cells_not_bytes() {
        let mut term = TestTerminal::with_size(20, 1);
        term.render_widget(Paragraph::new("██ ok"), term.area());
        assert_eq!(term.find("ok"), Some((3, 0)));
    }

    #[test]
    fn test_create_state_with_results() {
        let state = create_state_with_results();
        assert_eq!(state.results.cards().len(), 4);
    }
}
