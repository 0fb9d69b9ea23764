//! Design request form state

use gendesign_core::{DesignParameters, Strength, MAX_COST_STEP, MAX_MAX_COST, MIN_MAX_COST};

/// Materials offered as quick suggestions for the material field
pub const MATERIAL_SUGGESTIONS: [&str; 5] = [
    "Baja",
    "Aluminium",
    "Plastik ABS",
    "Serat Karbon",
    "Titanium",
];

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Prompt,
    Material,
    MaxCost,
    Strength,
    Submit,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Prompt,
        FormField::Material,
        FormField::MaxCost,
        FormField::Strength,
        FormField::Submit,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether typed characters edit this field
    pub fn is_text(self) -> bool {
        matches!(self, FormField::Prompt | FormField::Material)
    }
}

/// Live form values plus focus. Never reset by a submission.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub params: DesignParameters,
    pub focus: FormField,
    /// Index into [`MATERIAL_SUGGESTIONS`] last applied with the picker
    pub material_suggestion: Option<usize>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: DesignParameters) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    // ─────────────────────────────────────────────────────────
    // Setters
    // ─────────────────────────────────────────────────────────

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.params.prompt = prompt.into();
    }

    pub fn set_material(&mut self, material: impl Into<String>) {
        self.params.material = material.into();
        self.material_suggestion = None;
    }

    /// Clamps to the selectable range and snaps down to the step grid.
    pub fn set_max_cost(&mut self, max_cost: u64) {
        let clamped = max_cost.clamp(MIN_MAX_COST, MAX_MAX_COST);
        self.params.max_cost = clamped - (clamped - MIN_MAX_COST) % MAX_COST_STEP;
    }

    pub fn set_strength(&mut self, strength: Strength) {
        self.params.strength = strength;
    }

    pub fn increase_max_cost(&mut self) {
        self.set_max_cost(self.params.max_cost.saturating_add(MAX_COST_STEP));
    }

    pub fn decrease_max_cost(&mut self) {
        self.set_max_cost(self.params.max_cost.saturating_sub(MAX_COST_STEP));
    }

    // ─────────────────────────────────────────────────────────
    // Focus & Text Editing
    // ─────────────────────────────────────────────────────────

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Prompt => Some(&mut self.params.prompt),
            FormField::Material => Some(&mut self.params.material),
            _ => None,
        }
    }

    /// Appends to the focused text field; ignored elsewhere
    pub fn push_char(&mut self, c: char) {
        if self.focus == FormField::Material {
            self.material_suggestion = None;
        }
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.focus == FormField::Material {
            self.material_suggestion = None;
        }
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    pub fn clear(&mut self) {
        if self.focus == FormField::Material {
            self.material_suggestion = None;
        }
        if let Some(text) = self.focused_text_mut() {
            text.clear();
        }
    }

    /// Replaces the material with the next suggestion (wraps)
    pub fn next_material_suggestion(&mut self) {
        let next = match self.current_suggestion() {
            Some(idx) => (idx + 1) % MATERIAL_SUGGESTIONS.len(),
            None => 0,
        };
        self.apply_suggestion(next);
    }

    pub fn prev_material_suggestion(&mut self) {
        let len = MATERIAL_SUGGESTIONS.len();
        let prev = match self.current_suggestion() {
            Some(idx) => (idx + len - 1) % len,
            None => len - 1,
        };
        self.apply_suggestion(prev);
    }

    fn current_suggestion(&self) -> Option<usize> {
        self.material_suggestion.or_else(|| {
            MATERIAL_SUGGESTIONS
                .iter()
                .position(|m| m.eq_ignore_ascii_case(self.params.material.trim()))
        })
    }

    fn apply_suggestion(&mut self, idx: usize) {
        self.params.material = MATERIAL_SUGGESTIONS[idx].to_string();
        self.material_suggestion = Some(idx);
    }

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────

    /// Prompt and material are required (whitespace-only counts as empty)
    pub fn is_complete(&self) -> bool {
        !self.params.prompt.trim().is_empty() && !self.params.material.trim().is_empty()
    }

    /// Enabled only when complete and no request is in flight
    pub fn can_submit(&self, busy: bool) -> bool {
        !busy && self.is_complete()
    }

    /// Copy of the current parameters for one request
    pub fn snapshot(&self) -> DesignParameters {
        self.params.clone()
    }
}
