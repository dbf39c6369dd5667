//! UI components for the links page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `LinksState` from context and send user actions to the
//! shared `LinkStore`; they never touch storage directly.

pub mod link_form;
pub mod link_grid;
pub mod status_line;
