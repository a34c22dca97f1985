/// Palette for the dark chat window
use eframe::egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(0x0a, 0x0a, 0x0a);
pub const PANEL: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);
pub const FIELD: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a);
pub const BORDER: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);
pub const FIELD_BORDER: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const MUTED: Color32 = Color32::from_rgb(0x88, 0x88, 0x88);
pub const SOFT_TEXT: Color32 = Color32::from_rgb(0xaa, 0xaa, 0xaa);
pub const ACCENT: Color32 = Color32::from_rgb(0x66, 0x7e, 0xea);
pub const ACCENT_DEEP: Color32 = Color32::from_rgb(0x76, 0x4b, 0xa2);
