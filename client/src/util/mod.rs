//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, routing,
//! reactive notices) from page and component logic.

pub mod notify;
pub mod storage;
pub mod submit;
