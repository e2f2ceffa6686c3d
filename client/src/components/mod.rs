//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form widgets, the estimate preview and the notice
//! stack; pages compose them and own the form state.

pub mod estimate_panel;
pub mod field_input;
pub mod notice_stack;
