//! Material efficiency bar: a track filled to `score`% plus an `NN%` label

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::theme::palette;

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Room for `" 100%"`
const LABEL_WIDTH: u16 = 5;

/// Cells of a `width`-cell track covered by `score` (0..=100), rounded.
pub fn filled_width(score: u8, width: u16) -> u16 {
    let filled = (u32::from(score.min(100)) * u32::from(width) + 50) / 100;
    filled as u16
}

pub struct EfficiencyBar {
    score: u8,
}

impl EfficiencyBar {
    pub fn new(score: u8) -> Self {
        Self { score }
    }
}

impl Widget for EfficiencyBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let track = area.width.saturating_sub(LABEL_WIDTH);
        let filled = filled_width(self.score, track);
        let y = area.y;

        for i in 0..track {
            let (symbol, color) = if i < filled {
                (FILLED, palette::BAR_FILLED)
            } else {
                (EMPTY, palette::BAR_EMPTY)
            };
            buf[(area.x + i, y)]
                .set_symbol(symbol)
                .set_style(Style::default().fg(color));
        }

        let label = format!("{:>4}%", self.score);
        buf.set_stringn(
            area.x + track,
            y,
            label,
            usize::from(area.width - track),
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        );
    }
}
