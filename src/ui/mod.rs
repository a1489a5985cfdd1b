// src/ui/mod.rs
pub mod charts;
pub mod controls;
pub mod layout;

pub use layout::Layout;
