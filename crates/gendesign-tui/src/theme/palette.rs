//! Color palette for the studio theme (slate/blue, dark background).

use gendesign_core::HexColor;
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(17, 24, 39); // gray-900
pub const CARD_BG: Color = Color::Rgb(31, 41, 55); // gray-800
pub const POPUP_BG: Color = Color::Rgb(31, 41, 55);
pub const INPUT_BG: Color = Color::Rgb(55, 65, 81); // gray-700

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(55, 65, 81);
pub const BORDER_ACTIVE: Color = Color::Rgb(96, 165, 250); // blue-400

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(96, 165, 250);
pub const ACCENT_TEAL: Color = Color::Rgb(45, 212, 191); // teal-400
pub const BUTTON_BG: Color = Color::Rgb(37, 99, 235); // blue-600

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(229, 231, 235); // gray-200
pub const TEXT_SECONDARY: Color = Color::Rgb(156, 163, 175); // gray-400
pub const TEXT_MUTED: Color = Color::Rgb(107, 114, 128); // gray-500
pub const TEXT_BRIGHT: Color = Color::White;
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_RED: Color = Color::Rgb(248, 113, 113); // red-400
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);

// --- Efficiency bar ---
pub const BAR_FILLED: Color = ACCENT_TEAL;
pub const BAR_EMPTY: Color = INPUT_BG;

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(3, 7, 18);

/// Terminal color for a card's configured primary color
pub fn from_hex(color: HexColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}
