//! UI components for Textual

pub mod alert;
pub mod editor;
