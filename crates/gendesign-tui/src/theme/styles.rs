//! Semantic style builders for the studio theme.

use gendesign_core::HexColor;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn label() -> Style {
    Style::default()
        .fg(palette::TEXT_SECONDARY)
        .add_modifier(Modifier::BOLD)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection / input styles ---

/// Focused form field value
pub fn input_focused() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::INPUT_BG)
}

pub fn input_unfocused() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

/// Highlighted choice in an inline selector
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn button(enabled: bool, focused: bool) -> Style {
    match (enabled, focused) {
        (false, _) => Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::INPUT_BG),
        (true, true) => focused_selected(),
        (true, false) => Style::default()
            .fg(palette::TEXT_BRIGHT)
            .bg(palette::BUTTON_BG)
            .add_modifier(Modifier::BOLD),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(self::title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

/// Card frame drawn in the card's primary color; the selected card gets a
/// thick border.
pub fn card_block(color: HexColor, selected: bool) -> Block<'static> {
    let border_style = Style::default().fg(palette::from_hex(color));
    Block::default()
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(if selected {
            border_style.add_modifier(Modifier::BOLD)
        } else {
            border_style
        })
        .style(Style::default().bg(palette::CARD_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_disabled_button_is_muted() {
        let style = button(false, true);
        assert_eq!(style.fg, Some(palette::TEXT_MUTED));
        assert_ne!(style.bg, Some(palette::ACCENT));
    }

    #[test]
    fn test_accent_bold_has_modifier() {
        assert!(accent_bold().add_modifier.contains(Modifier::BOLD));
    }
}
