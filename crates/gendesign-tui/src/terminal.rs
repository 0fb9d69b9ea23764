//! Terminal setup and restoration

/// Chains a hook in front of the current panic hook so a panic leaves the
/// terminal out of raw mode before the report prints.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        previous(info);
    }));
}
