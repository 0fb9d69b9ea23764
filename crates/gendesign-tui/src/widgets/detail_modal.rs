//! Read-only design detail modal

use gendesign_app::DesignCard;
use gendesign_core::format_rupiah_f64;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{modal_overlay, EfficiencyBar};
use crate::theme::{palette, styles};

const MODAL_WIDTH: u16 = 68;
const MODAL_HEIGHT: u16 = 17;
const LABEL_WIDTH: u16 = 26;

pub const CLOSE_LABEL: &str = "Tutup";

/// Renders over the whole screen: dims what is behind it and centers itself.
pub struct DetailModal<'a> {
    card: &'a DesignCard,
}

impl<'a> DetailModal<'a> {
    pub fn new(card: &'a DesignCard) -> Self {
        Self { card }
    }
}

fn render_row(label: &'static str, value: Span<'static>, area: Rect, buf: &mut Buffer) {
    let [label_area, value_area] =
        Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)]).areas(area);
    buf.set_stringn(
        label_area.x,
        label_area.y,
        label,
        usize::from(label_area.width),
        styles::label(),
    );
    buf.set_span(value_area.x, value_area.y, &value, value_area.width);
}

impl Widget for DetailModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare(buf, area, MODAL_WIDTH, MODAL_HEIGHT);
        let option = &self.card.option;

        let block = styles::modal_block(" Detail Desain ")
            .border_style(Style::default().fg(palette::from_hex(self.card.appearance.primary_color)));
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height < 3 || inner.width < 4 {
            return;
        }
        let content = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };

        let [name, description, separator, material, strength, cost, efficiency, _, button] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(content);

        buf.set_stringn(
            name.x,
            name.y,
            &option.design_name,
            usize::from(name.width),
            styles::title(),
        );
        Paragraph::new(option.description.as_str())
            .style(styles::text_secondary())
            .wrap(Wrap { trim: true })
            .render(description, buf);
        buf.set_string(
            separator.x,
            separator.y,
            "─".repeat(usize::from(separator.width)),
            styles::border_inactive(),
        );

        let value = Style::default().fg(palette::TEXT_PRIMARY);
        render_row(
            "Material Digunakan",
            Span::styled(option.material_used.clone(), value),
            material,
            buf,
        );
        render_row(
            "Tingkat Kekuatan",
            Span::styled(option.strength_level.clone(), value),
            strength,
            buf,
        );
        render_row(
            "Perkiraan Biaya",
            Span::styled(
                format_rupiah_f64(option.estimated_cost),
                value.add_modifier(Modifier::BOLD),
            ),
            cost,
            buf,
        );

        let [eff_label, eff_bar] =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)])
                .areas(efficiency);
        buf.set_string(eff_label.x, eff_label.y, "Skor Efisiensi Material", styles::label());
        EfficiencyBar::new(option.material_efficiency_score).render(eff_bar, buf);

        let close = Line::from(Span::styled(
            format!("  {CLOSE_LABEL}  "),
            styles::button(true, true),
        ))
        .right_aligned();
        close.render(button, buf);
    }
}
