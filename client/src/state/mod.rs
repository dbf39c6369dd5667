//! Client-side state modules.

pub mod shelf;
