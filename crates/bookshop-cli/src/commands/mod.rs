//! Command handlers, one module per group.

pub mod books;
pub mod browse;
pub mod menu;
pub mod misc;
