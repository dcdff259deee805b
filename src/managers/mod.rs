// mcbe-preview state managers
// Managers own mutable client state: render history, panel/mode UI state, preview transforms.

pub mod history_store;
pub mod preview_manager;
pub mod ui_state_manager;
