//! Backdrop helpers shared by the detail and appearance modals.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a `width` x `height` rect inside `area`, shrinking it to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Mute everything already drawn in `area` so the modal stands out.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim);
            }
        }
    }
}

/// One-cell drop shadow along the right and bottom edges of `modal`.
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow = Style::default().bg(palette::SHADOW).fg(palette::SHADOW);
    let right = modal.right();
    let bottom = modal.bottom();

    let right_edge = (modal.y + 1..=bottom).map(|y| (right, y));
    let bottom_edge = (modal.x + 1..right).map(|x| (x, bottom));

    for pos in right_edge.chain(bottom_edge) {
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(' ');
            cell.set_style(shadow);
        }
    }
}

/// Dim the screen, cast the shadow and clear the modal area.
///
/// Returns the rect the modal content should render into.
pub fn prepare(buf: &mut Buffer, screen: Rect, width: u16, height: u16) -> Rect {
    let modal = centered_rect(width, height, screen);
    dim_background(buf, screen);
    render_shadow(buf, modal);
    Clear.render(modal, buf);
    modal
}
