/// Main application structure and frame loop
use crate::config::Config;
use crate::core::{
    ConversationState, IntentClassifier, ResponseTable, SendOutcome, SystemRandom,
    TokioScheduler, TurnController, TurnEvent,
};
use eframe::egui;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::time::Duration;
use super::{chat, header, theme};

/// Repaint interval while the typing dots animate
const ANIMATION_FRAME: Duration = Duration::from_millis(33);

pub struct ChatApp {
    pub config: Config,
    pub state: ConversationState,
    pub controller: TurnController,
    pub event_receiver: std_mpsc::Receiver<TurnEvent>,
    pub rendered_len: usize,
    pub style_initialized: bool,
}

impl ChatApp {
    /// Must be called inside the tokio runtime; timer tasks are spawned on it
    pub fn new(
        config: Config,
        table: ResponseTable,
        classifier: IntentClassifier,
        ctx: &egui::Context,
    ) -> Self {
        let (event_sender, event_receiver) = std_mpsc::channel();

        let repaint_ctx = ctx.clone();
        let scheduler = TokioScheduler::new(
            tokio::runtime::Handle::current(),
            event_sender,
            Arc::new(move || repaint_ctx.request_repaint()),
        );

        let controller = TurnController::new(
            classifier,
            table,
            Box::new(SystemRandom::new()),
            Box::new(scheduler),
            config.pacing(),
        );

        Self {
            config,
            state: ConversationState::new(),
            controller,
            event_receiver,
            rendered_len: 0,
            style_initialized: false,
        }
    }

    pub fn send_message(&mut self) {
        match self.controller.send(&mut self.state) {
            SendOutcome::Sent(turn) => log::debug!("📨 Message sent (turn {})", turn.0),
            SendOutcome::Blank => {}
            SendOutcome::Busy => log::debug!("⏳ Still thinking, message kept in the input"),
        }
    }

    /// Applies timer events posted by background tasks. Runs on the UI thread.
    pub fn process_turn_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.controller.handle(&mut self.state, event);
        }
    }

    fn init_style(&mut self, ctx: &egui::Context) {
        if self.style_initialized {
            return;
        }

        let mut style = (*ctx.style()).clone();
        style.visuals = egui::Visuals::dark();
        style.visuals.panel_fill = theme::BACKGROUND;
        style.visuals.extreme_bg_color = theme::FIELD;
        style.visuals.selection.bg_fill = theme::ACCENT;
        ctx.set_style(style);

        self.style_initialized = true;
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.init_style(ctx);
        self.process_turn_events();

        header::draw_header(ctx, &self.config, self.state.emotion());

        if chat::draw_input_bar(ctx, &mut self.state.draft, self.controller.is_busy()) {
            self.send_message();
        }

        chat::draw_transcript(ctx, &self.state, &mut self.rendered_len);

        if self.state.is_typing() {
            ctx.request_repaint_after(ANIMATION_FRAME);
        }
    }
}
