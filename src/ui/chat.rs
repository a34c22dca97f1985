/// Transcript and input bar rendering
use crate::core::ConversationState;
use eframe::egui;

use super::{chat_bubble, theme};

pub const SEND_BUTTON_WIDTH: f32 = 100.0;
pub const INPUT_HEIGHT: f32 = 44.0;
pub const WELCOME_MAX_WIDTH: f32 = 600.0;

/// Renders the scrollable transcript, the welcome panel when it is empty and
/// the typing indicator. `rendered_len` tracks what the last frame showed so
/// the view can jump to the newest entry when something is appended.
pub fn draw_transcript(ctx: &egui::Context, state: &ConversationState, rendered_len: &mut usize) {
    egui::CentralPanel::default()
        .frame(
            egui::Frame::new()
                .fill(theme::BACKGROUND)
                .inner_margin(egui::Margin::same(30)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if state.messages().is_empty() {
                        draw_welcome(ui);
                    }

                    for message in state.messages() {
                        chat_bubble::draw_bubble(ui, message);
                    }

                    if state.is_typing() {
                        let time = ui.input(|i| i.time);
                        chat_bubble::draw_typing_indicator(ui, time);
                    }

                    // typing indicator counts as an entry so it is scrolled into view too
                    let visible_len = state.messages().len() + usize::from(state.is_typing());
                    if visible_len != *rendered_len {
                        *rendered_len = visible_len;
                        ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                    }
                });
        });
}

fn draw_welcome(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);
        ui.set_max_width(WELCOME_MAX_WIDTH);

        ui.label(
            egui::RichText::new("Hello, I'm here.")
                .size(32.0)
                .strong()
                .color(theme::ACCENT),
        );
        ui.add_space(20.0);
        ui.add(
            egui::Label::new(
                egui::RichText::new(
                    "I think, I respond, I exist in this moment with you. \
                     Ask me anything - about existence, consciousness, or just how my day is going.",
                )
                .size(16.0)
                .color(theme::SOFT_TEXT),
            )
            .wrap(),
        );
    });
}

/// Renders the input bar and returns true when the user asked to send,
/// either with Enter (without Shift) or the Send button
pub fn draw_input_bar(ctx: &egui::Context, draft: &mut String, busy: bool) -> bool {
    let mut send_requested = false;

    egui::TopBottomPanel::bottom("input_bar")
        .frame(
            egui::Frame::new()
                .fill(theme::PANEL)
                .stroke(egui::Stroke::new(1.0, theme::BORDER))
                .inner_margin(egui::Margin::symmetric(30, 20)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let spacing = ui.spacing().item_spacing.x;
                let field_width = (ui.available_width() - SEND_BUTTON_WIDTH - spacing).max(100.0);

                let field = egui::Frame::new()
                    .fill(theme::FIELD)
                    .stroke(egui::Stroke::new(1.0, theme::FIELD_BORDER))
                    .corner_radius(INPUT_HEIGHT / 2.0)
                    .inner_margin(egui::Margin::symmetric(20, 12))
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::singleline(draft)
                                .id(egui::Id::new("chat_input"))
                                .hint_text("Share your thoughts...")
                                .font(egui::FontId::proportional(15.0))
                                .text_color(egui::Color32::WHITE)
                                .frame(false)
                                .desired_width(field_width - 40.0),
                        )
                    })
                    .inner;

                let (enter, shift) =
                    ui.input(|i| (i.key_pressed(egui::Key::Enter), i.modifiers.shift));
                let enter = enter_outcome(field.lost_focus(), enter, shift);
                if enter.refocus {
                    // keep typing without clicking back into the field
                    field.request_focus();
                }

                let button = egui::Button::new(
                    egui::RichText::new("Send")
                        .size(15.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                )
                .fill(theme::ACCENT_DEEP)
                .corner_radius(INPUT_HEIGHT / 2.0)
                .min_size(egui::vec2(SEND_BUTTON_WIDTH, INPUT_HEIGHT));

                let clicked = ui.add_enabled(!busy, button).clicked();

                send_requested = enter.send || clicked;
            });
        });

    send_requested
}

/// What an Enter press did to the input field this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EnterOutcome {
    send: bool,
    refocus: bool,
}

/// Enter sends unless Shift is held. Either way the field keeps focus.
fn enter_outcome(lost_focus: bool, enter_pressed: bool, shift_held: bool) -> EnterOutcome {
    let enter_left_field = lost_focus && enter_pressed;
    EnterOutcome {
        send: enter_left_field && !shift_held,
        refocus: enter_left_field,
    }
}
