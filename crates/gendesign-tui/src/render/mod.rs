//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use gendesign_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Pure: reads state, never changes it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.settings.ui.show_key_hints);

    frame.render_widget(
        widgets::MainHeader::new().with_generated_at(state.results.generated_at()),
        areas.header,
    );

    frame.render_widget(
        widgets::InputForm::new(&state.form)
            .busy(state.results.is_busy())
            .focused(state.ui_mode == UiMode::Form),
        areas.form,
    );

    frame.render_widget(
        widgets::ResultsPanel::new(&state.results)
            .focused(state.ui_mode != UiMode::Form)
            .log_file(state.log_file.as_deref()),
        areas.results,
    );

    if let Some(footer) = areas.footer {
        frame.render_widget(
            widgets::KeyHints::new(state.ui_mode, state.form.focus),
            footer,
        );
    }

    // Modals draw last, over everything
    match state.ui_mode {
        UiMode::DetailModal => {
            if let Some(card) = state.detail() {
                frame.render_widget(widgets::DetailModal::new(card), area);
            }
        }
        UiMode::AppearanceModal => {
            if let Some(editor) = &state.appearance_editor {
                frame.render_widget(widgets::AppearanceModal::new(editor), area);
            }
        }
        UiMode::Form | UiMode::Results => {}
    }
}
