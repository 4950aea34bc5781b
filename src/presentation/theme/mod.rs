//! Colour palette derived from the configured accent.

mod adapter;
mod service;

pub use service::{Palette, parse_color};
