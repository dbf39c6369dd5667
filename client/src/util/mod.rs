//! Browser glue plugged into the link store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic:
//! storage, confirmation and presentation each implement one store seam.

pub mod confirm;
pub mod local_storage;
pub mod presenter;
