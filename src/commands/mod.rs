//! Tauri commands module
//!
//! One command per user interaction with the form:
//! - `pick_image` / `clear_image`: the two file inputs
//! - `generate_pack`: the submit button
//! - `save_archive` / `reveal_download`: the download link

mod forge_commands;

pub use forge_commands::*;
