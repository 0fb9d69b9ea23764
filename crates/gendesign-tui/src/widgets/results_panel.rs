//! Results panel: exactly one of placeholder, spinner, error or card grid

use std::path::Path;

use gendesign_app::results::GRID_COLUMNS;
use gendesign_app::{ResultView, ResultsState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::design_card::{DesignCardWidget, CARD_HEIGHT};
use crate::theme::{palette, styles};

pub const RESULTS_TITLE: &str = " Hasil Generasi Desain ";
pub const IDLE_MESSAGE: &str = "Opsi desain yang dihasilkan akan muncul di sini.";
pub const IDLE_HINT: &str = "Isi formulir dan klik \"Hasilkan Desain\" untuk memulai.";
pub const LOADING_MESSAGE: &str = "AI sedang berpikir... Menghasilkan opsi desain...";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub struct ResultsPanel<'a> {
    results: &'a ResultsState,
    focused: bool,
    log_file: Option<&'a Path>,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(results: &'a ResultsState) -> Self {
        Self {
            results,
            focused: false,
            log_file: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Log file named under the error message
    pub fn log_file(mut self, log_file: Option<&'a Path>) -> Self {
        self.log_file = log_file;
        self
    }

    fn render_idle(area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::styled(IDLE_MESSAGE, styles::text_secondary()),
            Line::default(),
            Line::styled(IDLE_HINT, styles::text_muted()),
        ];
        render_centered(lines, area, buf);
    }

    fn render_loading(spinner: usize, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::styled(
                spinner_frame(spinner),
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(LOADING_MESSAGE, styles::text_secondary()),
        ];
        render_centered(lines, area, buf);
    }

    fn render_error(&self, message: &str, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(vec![
            Span::styled("✗ ", styles::status_red().add_modifier(Modifier::BOLD)),
            Span::styled(message.to_string(), styles::status_red()),
        ])];
        if let Some(path) = self.log_file {
            lines.push(Line::default());
            lines.push(Line::styled(
                format!("Log: {}", path.display()),
                styles::text_muted(),
            ));
        }
        render_centered(lines, area, buf);
    }

    fn render_grid(&self, area: Rect, buf: &mut Buffer) {
        let cards = self.results.cards();
        let selected = self.results.selected_index();

        let total_rows = cards.len().div_ceil(GRID_COLUMNS);
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));

        // Keep the row of the selected card on screen
        let selected_row = selected.unwrap_or(0) / GRID_COLUMNS;
        let first_row = selected_row.saturating_sub(visible_rows - 1);

        let columns = Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .spacing(1)
            .split(area);

        for (slot, row) in (first_row..total_rows).take(visible_rows).enumerate() {
            let y = area.y + slot as u16 * CARD_HEIGHT;
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            for (col, column) in columns.iter().enumerate() {
                let index = row * GRID_COLUMNS + col;
                let Some(card) = cards.get(index) else {
                    break;
                };
                let card_area = Rect::new(column.x, y, column.width, height);
                DesignCardWidget::new(card)
                    .selected(self.focused && selected == Some(index))
                    .render(card_area, buf);
            }
        }

        if total_rows > visible_rows {
            let indicator = format!(" {}/{} ", selected_row + 1, total_rows);
            let x = area.right().saturating_sub(indicator.len() as u16);
            buf.set_string(x, area.bottom().saturating_sub(1), indicator, styles::text_muted());
        }
    }
}

fn render_centered(lines: Vec<Line<'static>>, area: Rect, buf: &mut Buffer) {
    let height = (lines.len() as u16).min(area.height);
    let y = area.y + (area.height - height) / 2;
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(Rect::new(area.x, y, area.width, area.height - (y - area.y)), buf);
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(self.focused)
            .title(RESULTS_TITLE)
            .title_style(styles::title())
            .style(Style::default().bg(palette::DEEPEST_BG));
        if !self.results.cards().is_empty() {
            block = block.title(
                Line::styled(
                    format!(" {} opsi ", self.results.cards().len()),
                    styles::text_muted(),
                )
                .right_aligned(),
            );
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        match self.results.view() {
            ResultView::Idle => Self::render_idle(inner, buf),
            ResultView::Results(cards) if cards.is_empty() => Self::render_idle(inner, buf),
            ResultView::Loading { spinner_frame, .. } => {
                Self::render_loading(*spinner_frame, inner, buf)
            }
            ResultView::Error(message) => self.render_error(message, inner, buf),
            ResultView::Results(_) => self.render_grid(inner, buf),
        }
    }
}
