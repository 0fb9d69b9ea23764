//! Screen layout definitions for the TUI
//!
//! Header on top, form and results side by side (stacked on narrow
//! terminals), optional key hint footer at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the form and results panels stack vertically
pub const NARROW_WIDTH: u16 = 72;

/// Header height: top border + title row + subtitle row + bottom border
const HEADER_HEIGHT: u16 = 4;

/// Rows the form needs to show every field, borders included
const FORM_MIN_HEIGHT: u16 = 15;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    /// Input form panel
    pub form: Rect,
    /// Results panel (placeholder, spinner, error or card grid)
    pub results: Rect,
    pub footer: Option<Rect>,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_footer` - Reserve one row for key hints
pub fn create(area: Rect, show_footer: bool) -> ScreenAreas {
    let footer_height = u16::from(show_footer);
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(footer_height),
    ])
    .areas(area);

    // The web layout gives the form one third of the row
    let [form, results] = if area.width < NARROW_WIDTH {
        Layout::vertical([Constraint::Length(FORM_MIN_HEIGHT), Constraint::Min(3)]).areas(body)
    } else {
        Layout::horizontal([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)]).areas(body)
    };

    ScreenAreas {
        header,
        form,
        results,
        footer: show_footer.then_some(footer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_is_side_by_side() {
        let layout = create(Rect::new(0, 0, 120, 40), true);

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.form.y, layout.results.y);
        assert!(layout.form.width < layout.results.width);
        assert_eq!(layout.form.width + layout.results.width, 120);

        let footer = layout.footer.unwrap();
        assert_eq!(footer.height, 1);
        assert_eq!(footer.y, 39);
    }

    #[test]
    fn test_narrow_layout_stacks_panels() {
        let layout = create(Rect::new(0, 0, 60, 40), true);

        assert_eq!(layout.form.x, layout.results.x);
        assert!(layout.results.y > layout.form.y);
        assert_eq!(layout.form.width, 60);
    }

    #[test]
    fn test_no_footer_gives_space_to_body() {
        let layout = create(Rect::new(0, 0, 100, 30), false);

        assert!(layout.footer.is_none());
        assert_eq!(layout.form.height, 30 - HEADER_HEIGHT);
    }
}
