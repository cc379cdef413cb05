//! Line-plot viewers for the CSV dumps written by the audio capture tool.
//!
//! Load, then build a [`figure::Figure`], then [`app::show`] it.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod figure;
pub mod ui;
