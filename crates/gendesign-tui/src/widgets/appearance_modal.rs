//! Appearance customization modal
//!
//! Shows the draft, not the card: nothing here is applied until the draft
//! is saved.

use gendesign_app::{AppearanceEditorState, EditorField};
use gendesign_core::{LightingScheme, VisualStyle, PRESET_COLORS};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use super::modal_overlay;
use crate::theme::{palette, styles};

const MODAL_WIDTH: u16 = 60;
const MODAL_HEIGHT: u16 = 16;

pub const MODAL_TITLE: &str = " Kustomisasi Tampilan ";
pub const SAVE_LABEL: &str = "Simpan Preferensi";
pub const CANCEL_LABEL: &str = "Batal";

pub struct AppearanceModal<'a> {
    editor: &'a AppearanceEditorState,
}

impl<'a> AppearanceModal<'a> {
    pub fn new(editor: &'a AppearanceEditorState) -> Self {
        Self { editor }
    }

    fn focused(&self, field: EditorField) -> bool {
        self.editor.focus == field
    }

    fn label(&self, field: EditorField, text: &'static str) -> Line<'static> {
        if self.focused(field) {
            Line::from(vec![
                Span::styled("▸ ", styles::accent()),
                Span::styled(text, styles::accent_bold()),
            ])
        } else {
            Line::from(vec![Span::raw("  "), Span::styled(text, styles::label())])
        }
    }

    fn color_row(&self) -> Line<'static> {
        let draft = self.editor.draft.primary_color;
        let hex_style = if self.editor.hex_invalid() {
            styles::status_red()
        } else if self.focused(EditorField::Color) {
            styles::input_focused()
        } else {
            styles::input_unfocused()
        };

        let mut spans = vec![
            Span::raw("  "),
            Span::styled("████", Style::default().fg(palette::from_hex(draft))),
            Span::raw(" "),
            Span::styled(format!("{:<7}", self.editor.hex_input), hex_style),
            Span::raw("  "),
        ];

        // Preset swatches; the active one is bracketed
        for preset in PRESET_COLORS {
            let color = Style::default().fg(palette::from_hex(preset));
            if preset == draft {
                spans.push(Span::styled("[■]", color));
            } else {
                spans.push(Span::styled(" ■ ", color));
            }
        }
        Line::from(spans)
    }

    fn choices<T: PartialEq + Copy>(
        &self,
        field: EditorField,
        all: &[T],
        current: T,
        label: impl Fn(T) -> &'static str,
    ) -> Line<'static> {
        let focused = self.focused(field);
        let mut spans = vec![Span::raw("  ")];
        for &choice in all {
            let style = match (choice == current, focused) {
                (true, true) => styles::focused_selected(),
                (true, false) => styles::accent_bold(),
                (false, _) => styles::text_secondary(),
            };
            spans.push(Span::styled(format!(" {} ", label(choice)), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn buttons(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {CANCEL_LABEL}  "),
                if self.focused(EditorField::Cancel) {
                    styles::focused_selected()
                } else {
                    Style::default()
                        .fg(palette::TEXT_PRIMARY)
                        .bg(palette::INPUT_BG)
                },
            ),
            Span::raw("  "),
            Span::styled(
                format!("  {SAVE_LABEL}  "),
                styles::button(true, self.focused(EditorField::Save)),
            ),
        ])
        .right_aligned()
    }
}

impl Widget for AppearanceModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::prepare(buf, area, MODAL_WIDTH, MODAL_HEIGHT);
        let block = styles::modal_block(MODAL_TITLE);
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height < 2 || inner.width < 4 {
            return;
        }
        let content = Rect {
            x: inner.x + 1,
            width: inner.width - 2,
            ..inner
        };

        let [subtitle, _, color_label, color, _, light_label, light, _, style_label, style, _, buttons] =
            Layout::vertical([Constraint::Length(1); 12]).areas(content);

        Line::from(vec![
            Span::styled("Ubah preferensi visual untuk ", styles::text_secondary()),
            Span::styled(self.editor.design_name.clone(), styles::accent_bold()),
        ])
        .render(subtitle, buf);

        self.label(EditorField::Color, "Warna Utama")
            .render(color_label, buf);
        self.color_row().render(color, buf);

        self.label(EditorField::Lighting, "Skema Pencahayaan")
            .render(light_label, buf);
        self.choices(
            EditorField::Lighting,
            &LightingScheme::ALL,
            self.editor.draft.lighting_scheme,
            |l| l.label(),
        )
        .render(light, buf);

        self.label(EditorField::Style, "Gaya Visual")
            .render(style_label, buf);
        self.choices(
            EditorField::Style,
            &VisualStyle::ALL,
            self.editor.draft.visual_style,
            |s| s.label(),
        )
        .render(style, buf);

        self.buttons().render(buttons, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use gendesign_core::AppearanceSettings;

    fn editor() -> AppearanceEditorState {
        AppearanceEditorState::new(0, "Rangka X", AppearanceSettings::default())
    }

    fn render(editor: &AppearanceEditorState) -> TestTerminal {
        let mut term = TestTerminal::new();
        term.render_widget(AppearanceModal::new(editor), term.area());
        term
    }

    #[test]
    fn test_modal_shows_fields_and_buttons() {
        let term = render(&editor());

        assert!(term.buffer_contains("Kustomisasi Tampilan"));
        assert!(term.buffer_contains("Ubah preferensi visual untuk Rangka X"));
        assert!(term.buffer_contains("#4b5563"));
        assert!(term.buffer_contains("Dramatis"));
        assert!(term.buffer_contains("Cetak Biru"));
        assert!(term.buffer_contains(SAVE_LABEL));
        assert!(term.buffer_contains(CANCEL_LABEL));
    }

    #[test]
    fn test_swatch_uses_draft_color() {
        let mut editor = editor();
        editor.cycle_next();
        let term = render(&editor);

        let (x, y) = term.find("████").unwrap();
        assert_eq!(term.buffer()[(x, y)].fg, palette::from_hex(PRESET_COLORS[1]));
        assert!(term.buffer_contains(&PRESET_COLORS[1].to_string()));
    }

    #[test]
    fn test_partial_hex_is_marked_invalid() {
        let mut editor = editor();
        editor.backspace_hex();
        let term = render(&editor);

        let (x, y) = term.find("#4b556").unwrap();
        assert_eq!(term.buffer()[(x, y)].fg, palette::STATUS_RED);
    }

    #[test]
    fn test_selected_lighting_is_highlighted_when_focused() {
        let mut editor = editor();
        editor.focus_next();
        editor.cycle_next();
        let term = render(&editor);

        let (x, y) = term.find("Alami").unwrap();
        assert_eq!(term.buffer()[(x, y)].bg, palette::ACCENT);
    }
}
