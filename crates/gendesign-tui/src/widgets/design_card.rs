//! One design option in the results grid
//!
//! The border takes the card's primary color; lighting and visual style are
//! shown on the bottom border.

use gendesign_app::DesignCard;
use gendesign_core::format_rupiah_f64;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::EfficiencyBar;
use crate::theme::{palette, styles};

/// Rows a card needs, borders included
pub const CARD_HEIGHT: u16 = 9;

const LABEL_WIDTH: usize = 10;

pub struct DesignCardWidget<'a> {
    card: &'a DesignCard,
    selected: bool,
}

impl<'a> DesignCardWidget<'a> {
    pub fn new(card: &'a DesignCard) -> Self {
        Self {
            card,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

fn field_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<width$}", width = LABEL_WIDTH), styles::text_muted()),
        Span::styled(
            value,
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

impl Widget for DesignCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let appearance = &self.card.appearance;
        let option = &self.card.option;

        let footer = format!(
            " {} · {} ",
            appearance.lighting_scheme.label(),
            appearance.visual_style.label()
        );
        let block = styles::card_block(appearance.primary_color, self.selected)
            .title_bottom(Line::styled(footer, styles::text_muted()).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 2 {
            return;
        }

        let content = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };
        let width = usize::from(content.width);

        let lines = vec![
            Line::styled(truncate(&option.design_name, width), styles::title()),
            Line::styled(truncate(&option.description, width), styles::text_secondary()),
            field_line("Material", truncate(&option.material_used, width.saturating_sub(LABEL_WIDTH))),
            field_line("Kekuatan", option.strength_level.clone()),
            field_line("Biaya", format_rupiah_f64(option.estimated_cost)),
            Line::styled("Efisiensi Material", styles::text_muted()),
        ];
        let text_rows = lines.len() as u16;
        Paragraph::new(lines).render(content, buf);

        if content.height > text_rows {
            let bar_area = Rect {
                y: content.y + text_rows,
                height: 1,
                ..content
            };
            EfficiencyBar::new(option.material_efficiency_score).render(bar_area, buf);
        }
    }
}

/// Cut `text` to `width` cells, marking the cut with `…`
pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
