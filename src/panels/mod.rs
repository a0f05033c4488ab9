//! UI Panels
//!
//! Each panel is a function that takes &mut Ui and the relevant state.
//! Panels render UI and report user intent via returned actions; they do
//! not perform I/O or own state.

mod query;

pub use query::{query_panel, QueryPanelAction};
