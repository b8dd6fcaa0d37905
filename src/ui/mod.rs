//! Terminal output for the `lightbox` binary: design tokens, building
//! blocks, per-command views and NDJSON events.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
