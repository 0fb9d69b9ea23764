//! Key hint footer

use gendesign_app::{FormField, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub struct KeyHints {
    mode: UiMode,
    form_focus: FormField,
}

impl KeyHints {
    pub fn new(mode: UiMode, form_focus: FormField) -> Self {
        Self { mode, form_focus }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.mode {
            UiMode::Form => {
                let mut hints = vec![("Tab", "pindah"), ("Enter", "hasilkan")];
                match self.form_focus {
                    FormField::Material => hints.push(("Ctrl+N/P", "saran material")),
                    FormField::MaxCost => hints.push(("←/→ Home/End", "biaya")),
                    FormField::Strength => hints.push(("←/→", "kekuatan")),
                    FormField::Prompt => hints.push(("Ctrl+U", "hapus")),
                    FormField::Submit => hints.push(("q", "keluar")),
                }
                hints.push(("Esc", "hasil"));
                hints.push(("Ctrl+C", "keluar"));
                hints
            }
            UiMode::Results => vec![
                ("←↑↓→", "pilih"),
                ("Enter", "detail"),
                ("c", "tampilan"),
                ("g", "hasilkan ulang"),
                ("Esc", "formulir"),
                ("q", "keluar"),
            ],
            UiMode::DetailModal => vec![("Esc/Enter", "tutup"), ("c", "tampilan")],
            UiMode::AppearanceModal => vec![
                ("Tab", "pindah"),
                ("←/→", "ubah"),
                ("#hex", "warna"),
                ("Ctrl+S", "simpan"),
                ("Esc", "batal"),
            ],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
