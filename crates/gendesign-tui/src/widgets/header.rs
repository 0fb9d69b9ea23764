//! Header bar widget
//!
//! App title with the tagline beneath it and, once results exist, the time
//! they were generated.

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "Perangkat Lunak Desain Generatif";
pub const TAGLINE: &str =
    "Masukkan parameter Anda, dan biarkan AI menciptakan solusi desain yang optimal.";

pub struct MainHeader {
    generated_at: Option<DateTime<Local>>,
}

impl MainHeader {
    pub fn new() -> Self {
        Self { generated_at: None }
    }

    pub fn with_generated_at(mut self, generated_at: Option<DateTime<Local>>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

impl Default for MainHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled("◆ ", Style::default().fg(palette::ACCENT_TEAL)),
            Span::styled(
                APP_TITLE,
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(inner.x + 1, inner.y, &title, inner.width.saturating_sub(1));

        if let Some(at) = self.generated_at {
            let stamp = format!("Dihasilkan {}", at.format("%H:%M:%S"));
            let width = stamp.chars().count() as u16;
            if width + 2 < inner.width {
                let x = inner.right() - width - 1;
                buf.set_string(x, inner.y, stamp, styles::text_muted());
            }
        }

        if inner.height > 1 {
            buf.set_stringn(
                inner.x + 1,
                inner.y + 1,
                TAGLINE,
                usize::from(inner.width.saturating_sub(2)),
                styles::text_secondary(),
            );
        }
    }
}
