//! Appearance customization modal state

use gendesign_core::{AppearanceSettings, HexColor, PRESET_COLORS};

/// Longest accepted hex input, `#rrggbb`
const MAX_HEX_INPUT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Color,
    Lighting,
    Style,
    Save,
    Cancel,
}

impl EditorField {
    pub const ALL: [EditorField; 5] = [
        EditorField::Color,
        EditorField::Lighting,
        EditorField::Style,
        EditorField::Save,
        EditorField::Cancel,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Draft copy of one card's appearance.
///
/// Nothing reaches the card or the store until the draft is saved.
#[derive(Debug, Clone, PartialEq)]
pub struct AppearanceEditorState {
    /// Card being edited
    pub card_index: usize,
    pub design_name: String,
    pub draft: AppearanceSettings,
    pub focus: EditorField,
    /// Hex text as typed; applied to the draft only when it parses
    pub hex_input: String,
}

impl AppearanceEditorState {
    pub fn new(card_index: usize, design_name: impl Into<String>, current: AppearanceSettings) -> Self {
        Self {
            card_index,
            design_name: design_name.into(),
            draft: current,
            focus: EditorField::default(),
            hex_input: current.primary_color.to_string(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The typed hex does not (yet) name a color
    pub fn hex_invalid(&self) -> bool {
        self.hex_input.parse::<HexColor>().is_err()
    }

    /// ← on the focused field
    pub fn cycle_prev(&mut self) {
        match self.focus {
            EditorField::Color => self.step_preset(PRESET_COLORS.len() - 1),
            EditorField::Lighting => {
                self.draft.lighting_scheme = self.draft.lighting_scheme.prev();
            }
            EditorField::Style => self.draft.visual_style = self.draft.visual_style.prev(),
            EditorField::Save | EditorField::Cancel => self.focus = EditorField::Save,
        }
    }

    /// → on the focused field
    pub fn cycle_next(&mut self) {
        match self.focus {
            EditorField::Color => self.step_preset(1),
            EditorField::Lighting => {
                self.draft.lighting_scheme = self.draft.lighting_scheme.next();
            }
            EditorField::Style => self.draft.visual_style = self.draft.visual_style.next(),
            EditorField::Save | EditorField::Cancel => self.focus = EditorField::Cancel,
        }
    }

    fn step_preset(&mut self, step: usize) {
        let next = match self.draft.primary_color.preset_index() {
            Some(idx) => (idx + step) % PRESET_COLORS.len(),
            None => 0,
        };
        self.set_color(PRESET_COLORS[next]);
    }

    pub fn set_color(&mut self, color: HexColor) {
        self.draft.primary_color = color;
        self.hex_input = color.to_string();
    }

    /// Types into the hex field. Only `#` (first position) and hex digits
    /// are accepted.
    pub fn push_hex_char(&mut self, c: char) {
        if self.focus != EditorField::Color || self.hex_input.len() >= MAX_HEX_INPUT {
            return;
        }
        let accepted = if self.hex_input.is_empty() {
            c == '#'
        } else {
            c.is_ascii_hexdigit()
        };
        if accepted {
            self.hex_input.push(c);
            self.apply_hex();
        }
    }

    pub fn backspace_hex(&mut self) {
        if self.focus == EditorField::Color {
            self.hex_input.pop();
            self.apply_hex();
        }
    }

    fn apply_hex(&mut self) {
        // `#rgb` is a valid prefix of `#rrggbb`; wait for the full form
        if self.hex_input.len() != MAX_HEX_INPUT {
            return;
        }
        if let Ok(color) = self.hex_input.parse::<HexColor>() {
            self.draft.primary_color = color;
        }
    }
}
