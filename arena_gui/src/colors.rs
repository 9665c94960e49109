#![allow(dead_code)]

use eframe::egui::Color32;

pub use arena_core::constants::{DOOR_COLOR, WALL_COLOR};

pub const BACKGROUND_COLOR: Color32 = Color32::BLACK;
