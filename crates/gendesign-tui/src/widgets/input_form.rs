//! Design parameter form panel
//!
//! Prompt and material text inputs, the cost slider, the strength selector
//! and the submit button. The button renders disabled while a request is in
//! flight or a required field is blank.

use gendesign_app::{FormField, FormState};
use gendesign_core::{format_rupiah, Strength, MAX_MAX_COST, MIN_MAX_COST};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::{palette, styles};

pub const FORM_TITLE: &str = " Parameter Desain ";
pub const SUBMIT_LABEL: &str = "Hasilkan Desain";
pub const BUSY_LABEL: &str = "Memproses...";

const PROMPT_PLACEHOLDER: &str = "Contoh: rangka sepeda gunung...";
const MATERIAL_PLACEHOLDER: &str = "Contoh: Baja, Aluminium, dll.";
const CURSOR: &str = "▏";

pub struct InputForm<'a> {
    form: &'a FormState,
    /// A generation request is in flight
    busy: bool,
    /// Keyboard focus is on this panel
    focused: bool,
}

impl<'a> InputForm<'a> {
    pub fn new(form: &'a FormState) -> Self {
        Self {
            form,
            busy: false,
            focused: true,
        }
    }

    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn field_focused(&self, field: FormField) -> bool {
        self.focused && self.form.focus == field
    }

    fn label(&self, field: FormField, text: String) -> Line<'static> {
        if self.field_focused(field) {
            Line::from(vec![
                Span::styled("▸ ", styles::accent()),
                Span::styled(text, styles::accent_bold()),
            ])
        } else {
            Line::from(vec![Span::raw("  "), Span::styled(text, styles::label())])
        }
    }

    fn text_input(
        &self,
        field: FormField,
        value: &str,
        placeholder: &'static str,
        width: u16,
    ) -> Line<'static> {
        let focused = self.field_focused(field);
        let style = if focused {
            styles::input_focused()
        } else {
            styles::input_unfocused()
        };

        if value.is_empty() && !focused {
            return Line::from(vec![
                Span::raw("  "),
                Span::styled(placeholder, styles::text_muted()),
            ]);
        }

        // indent + cursor
        let room = usize::from(width.saturating_sub(3));
        let mut spans = vec![
            Span::raw("  "),
            Span::styled(visible_tail(value, room).to_string(), style),
        ];
        if focused {
            spans.push(Span::styled(CURSOR, styles::accent()));
        }
        Line::from(spans)
    }

    fn cost_slider(&self, width: u16) -> Line<'static> {
        let track = usize::from(width.saturating_sub(4)).max(1);
        let span = (MAX_MAX_COST - MIN_MAX_COST) as f64;
        let ratio = (self.form.params.max_cost.saturating_sub(MIN_MAX_COST)) as f64 / span;
        let knob = ((track - 1) as f64 * ratio).round() as usize;

        let knob_style = if self.field_focused(FormField::MaxCost) {
            Style::default().fg(palette::TEXT_BRIGHT)
        } else {
            styles::accent()
        };
        Line::from(vec![
            Span::raw("  "),
            Span::styled("━".repeat(knob), styles::accent()),
            Span::styled("●", knob_style),
            Span::styled(
                "─".repeat(track - knob - 1),
                Style::default().fg(palette::BORDER_DIM),
            ),
        ])
    }

    fn strength_selector(&self) -> Line<'static> {
        let focused = self.field_focused(FormField::Strength);
        let mut spans = vec![Span::raw("  ")];
        for strength in Strength::ALL {
            let style = match (strength == self.form.params.strength, focused) {
                (true, true) => styles::focused_selected(),
                (true, false) => styles::accent_bold(),
                (false, _) => styles::text_secondary(),
            };
            spans.push(Span::styled(format!(" {} ", strength.label()), style));
        }
        Line::from(spans)
    }

    fn submit_button(&self) -> Line<'static> {
        let enabled = self.form.can_submit(self.busy);
        let text = if self.busy { BUSY_LABEL } else { SUBMIT_LABEL };
        let style = styles::button(enabled, self.field_focused(FormField::Submit));
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("  {text}  "), style),
        ])
    }
}

impl Widget for InputForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(FORM_TITLE)
            .title_style(styles::title())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let params = &self.form.params;
        let mut material_label = self.label(FormField::Material, "Material Utama".to_string());
        if self.field_focused(FormField::Material) {
            material_label.push_span(Span::styled("  Ctrl+N/P: saran", styles::text_muted()));
        }

        let lines = vec![
            self.label(FormField::Prompt, "Deskripsi Produk".to_string()),
            self.text_input(
                FormField::Prompt,
                &params.prompt,
                PROMPT_PLACEHOLDER,
                inner.width,
            ),
            Line::default(),
            material_label,
            self.text_input(
                FormField::Material,
                &params.material,
                MATERIAL_PLACEHOLDER,
                inner.width,
            ),
            Line::default(),
            self.label(
                FormField::MaxCost,
                format!("Batasan Biaya: {}", format_rupiah(params.max_cost)),
            ),
            self.cost_slider(inner.width),
            Line::default(),
            self.label(FormField::Strength, "Kekuatan".to_string()),
            self.strength_selector(),
            Line::default(),
            self.submit_button(),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Longest suffix of `text` that fits in `width` terminal cells
fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, ch) in text.char_indices().rev() {
        used += ch.width().unwrap_or(0);
        if used > width {
            return &text[idx + ch.len_utf8()..];
        }
    }
    text
}
