//! Ratatui widgets for the juris TUI.

pub mod alert;
pub mod analysis;
pub mod command_bar;
pub mod help;
pub mod jurisprudence_form;
pub mod process_card;
pub mod process_form;
pub mod result_pane;
pub mod tab_bar;
pub mod text_input;
