//! Custom widget components

mod appearance_modal;
pub mod design_card;
mod detail_modal;
mod efficiency_bar;
mod footer;
mod header;
mod input_form;
pub mod modal_overlay;
mod results_panel;

pub use appearance_modal::AppearanceModal;
pub use design_card::DesignCardWidget;
pub use detail_modal::DetailModal;
pub use efficiency_bar::{filled_width, EfficiencyBar};
pub use footer::KeyHints;
pub use header::MainHeader;
pub use input_form::InputForm;
pub use results_panel::{ResultsPanel, IDLE_MESSAGE, LOADING_MESSAGE};
