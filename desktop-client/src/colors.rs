use eframe::egui;

pub const NOKIA_BG: egui::Color32 = egui::Color32::from_rgb(199, 240, 216);
pub const NOKIA_FG: egui::Color32 = egui::Color32::from_rgb(15, 56, 15);
pub const PHONE_FRAME: egui::Color32 = egui::Color32::from_rgb(50, 50, 50);
