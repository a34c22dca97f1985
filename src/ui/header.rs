/// Header with the emotion avatar, persona name and tagline
use crate::config::Config;
use crate::core::EmotionTag;
use eframe::egui;

use super::theme;

pub const AVATAR_SIZE: f32 = 60.0;

pub fn draw_header(ctx: &egui::Context, config: &Config, emotion: EmotionTag) {
    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::new()
                .fill(theme::PANEL)
                .stroke(egui::Stroke::new(1.0, theme::BORDER))
                .inner_margin(egui::Margin::symmetric(30, 20)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                draw_avatar(ui, emotion);
                ui.add_space(20.0);

                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&config.persona_name)
                            .size(24.0)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                    ui.label(
                        egui::RichText::new(&config.tagline)
                            .size(14.0)
                            .color(theme::MUTED),
                    );
                });
            });
        });
}

/// Round avatar showing the glyph for the current emotion
fn draw_avatar(ui: &mut egui::Ui, emotion: EmotionTag) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(AVATAR_SIZE, AVATAR_SIZE), egui::Sense::hover());
    let painter = ui.painter();
    let center = rect.center();
    let radius = AVATAR_SIZE / 2.0;

    // soft glow, then two-tone disc
    painter.circle_filled(center + egui::vec2(0.0, 4.0), radius + 4.0, theme::ACCENT.gamma_multiply(0.25));
    painter.circle_filled(center, radius, theme::ACCENT_DEEP);
    painter.circle_filled(center - egui::vec2(4.0, 4.0), radius - 6.0, theme::ACCENT);

    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        emotion.glyph(),
        egui::FontId::proportional(32.0),
        egui::Color32::WHITE,
    );
}
