/// Message bubbles and the typing indicator
use crate::core::{Message, Role};
use eframe::egui;

use super::theme;

/// Bubbles take at most this share of the transcript width
pub const MAX_BUBBLE_FRACTION: f32 = 0.7;
pub const BUBBLE_RADIUS: f32 = 18.0;
pub const DOT_RADIUS: f32 = 4.0;
pub const DOT_GAP: f32 = 5.0;
/// Seconds per pulse of a typing dot
pub const PULSE_PERIOD: f64 = 1.4;

fn bubble_frame(fill: egui::Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(BUBBLE_RADIUS)
        .inner_margin(egui::Margin::symmetric(18, 12))
}

/// Draws one message: user on the right, AI on the left
pub fn draw_bubble(ui: &mut egui::Ui, message: &Message) {
    let max_width = ui.available_width() * MAX_BUBBLE_FRACTION;
    let layout = match message.role() {
        Role::User => egui::Layout::right_to_left(egui::Align::TOP),
        Role::Ai => egui::Layout::left_to_right(egui::Align::TOP),
    };

    ui.with_layout(layout, |ui| {
        bubble_frame(theme::ACCENT).show(ui, |ui| {
            ui.set_max_width(max_width);
            ui.add(
                egui::Label::new(
                    egui::RichText::new(message.content())
                        .size(15.0)
                        .color(egui::Color32::WHITE),
                )
                .wrap(),
            );
        });
    });
    ui.add_space(15.0);
}

/// Three pulsing dots on the AI side. `time` is the UI clock in seconds.
pub fn draw_typing_indicator(ui: &mut egui::Ui, time: f64) {
    ui.with_layout(egui::Layout::left_to_right(egui::Align::TOP), |ui| {
        bubble_frame(theme::FIELD).show(ui, |ui| {
            let width = 3.0 * DOT_RADIUS * 2.0 + 2.0 * DOT_GAP;
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(width, DOT_RADIUS * 2.0), egui::Sense::hover());

            for i in 0..3 {
                let center = egui::pos2(
                    rect.min.x + DOT_RADIUS + i as f32 * (DOT_RADIUS * 2.0 + DOT_GAP),
                    rect.center().y,
                );
                let strength = dot_strength(time, i);
                ui.painter().circle_filled(
                    center,
                    DOT_RADIUS * (0.8 + 0.2 * strength),
                    theme::ACCENT.gamma_multiply(0.3 + 0.7 * strength),
                );
            }
        });
    });
    ui.add_space(15.0);
}

/// Pulse strength in `[0, 1]`; each dot lags the previous one
fn dot_strength(time: f64, index: usize) -> f32 {
    let phase = (time / PULSE_PERIOD - index as f64 * 0.16) * std::f64::consts::TAU;
    ((phase.sin() + 1.0) / 2.0) as f32
}
