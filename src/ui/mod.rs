// mcbe-preview presentation layer
// View-models the outer shells (RPC clients, CLI) render from.

pub mod error_notice;
pub mod history_panel;
