/// Turn controller: the single entry point that mutates the conversation.
///
/// One turn runs Idle → Sending → Responding → Idle. Sending happens inside
/// [`TurnController::send`]; Responding lasts until the scheduler delivers the
/// matching [`TurnEvent::ReplyDue`].
use super::conversation::{ConversationState, Message};
use super::intent::{EmotionTag, IntentClassifier};
use super::responses::{Category, ResponseTable};
use super::scheduler::Scheduler;
use super::selector::{RandomSource, ReplySelector};
use std::time::Duration;

/// Sequence number of an accepted send
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TurnId(pub u64);

/// Timer callbacks, delivered back to the controller by the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    ReplyDue(TurnId),
    EmotionResetDue(TurnId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Sent(TurnId),
    /// Draft was empty or whitespace only
    Blank,
    /// A reply is still pending; the draft is kept
    Busy,
}

/// Reply produced for one piece of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub category: Category,
    pub emotion: EmotionTag,
    pub text: String,
}

/// Simulated latency settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub thinking_min: Duration,
    pub thinking_max: Duration,
    pub emotion_reset: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            thinking_min: Duration::from_millis(1000),
            thinking_max: Duration::from_millis(2500),
            emotion_reset: Duration::from_millis(3000),
        }
    }
}

impl Pacing {
    fn thinking_delay(&self, fraction: f64) -> Duration {
        let spread = self.thinking_max.saturating_sub(self.thinking_min);
        self.thinking_min + spread.mul_f64(fraction.clamp(0.0, 1.0))
    }
}

enum Phase {
    Idle,
    Responding { turn: TurnId, input: String },
}

pub struct TurnController {
    classifier: IntentClassifier,
    table: ResponseTable,
    random: Box<dyn RandomSource>,
    scheduler: Box<dyn Scheduler>,
    pacing: Pacing,
    phase: Phase,
    next_turn: u64,
    last_answered: Option<TurnId>,
}

impl TurnController {
    pub fn new(
        classifier: IntentClassifier,
        table: ResponseTable,
        random: Box<dyn RandomSource>,
        scheduler: Box<dyn Scheduler>,
        pacing: Pacing,
    ) -> Self {
        Self {
            classifier,
            table,
            random,
            scheduler,
            pacing,
            phase: Phase::Idle,
            next_turn: 1,
            last_answered: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Responding { .. })
    }

    /// Classifies the input and picks a reply for it
    pub fn get_response(&mut self, input: &str) -> Reply {
        let intent = self.classifier.classify(input);
        let text = ReplySelector::pick(&self.table, intent.category, self.random.as_mut());

        Reply {
            category: intent.category,
            emotion: intent.emotion,
            text: text.to_string(),
        }
    }

    /// Sends the current draft as a user message and starts the thinking delay
    pub fn send(&mut self, state: &mut ConversationState) -> SendOutcome {
        if state.draft.trim().is_empty() {
            return SendOutcome::Blank;
        }
        if self.is_busy() {
            log::debug!("✋ Send ignored: reply still pending");
            return SendOutcome::Busy;
        }

        let turn = TurnId(self.next_turn);
        self.next_turn += 1;

        let input = std::mem::take(&mut state.draft);
        state.push(Message::user(input.clone()));
        state.set_typing(true);

        let delay = self.pacing.thinking_delay(self.random.next_fraction());
        log::debug!("💬 Turn {} sent, replying in {} ms", turn.0, delay.as_millis());

        self.phase = Phase::Responding { turn, input };
        self.scheduler.schedule(delay, TurnEvent::ReplyDue(turn));

        SendOutcome::Sent(turn)
    }

    /// Applies a timer event delivered by the scheduler
    pub fn handle(&mut self, state: &mut ConversationState, event: TurnEvent) {
        match event {
            TurnEvent::ReplyDue(turn) => self.deliver_reply(state, turn),
            TurnEvent::EmotionResetDue(turn) => {
                if self.last_answered == Some(turn) {
                    state.set_emotion(EmotionTag::Neutral);
                    log::debug!("😌 Emotion reset after turn {}", turn.0);
                } else {
                    log::debug!("⏰ Ignoring emotion reset for superseded turn {}", turn.0);
                }
            }
        }
    }

    fn deliver_reply(&mut self, state: &mut ConversationState, turn: TurnId) {
        let input = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Responding { turn: pending, input } if pending == turn => input,
            other => {
                self.phase = other;
                log::debug!("⏰ Ignoring reply for turn {}: not in flight", turn.0);
                return;
            }
        };

        let reply = self.get_response(&input);
        log::debug!(
            "🤖 Turn {} answered from '{}' ({:?})",
            turn.0,
            reply.category,
            reply.emotion
        );

        state.set_typing(false);
        state.push(Message::ai(reply.text));
        state.set_emotion(reply.emotion);

        self.last_answered = Some(turn);
        self.scheduler
            .schedule(self.pacing.emotion_reset, TurnEvent::EmotionResetDue(turn));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::conversation::Role;
    use crate::core::scheduler::testing::RecordingScheduler;
    use crate::core::selector::testing::ScriptedRandom;

    fn controller(random: ScriptedRandom) -> (TurnController, RecordingScheduler) {
        let scheduler = RecordingScheduler::default();
        let controller = TurnController::new(
            IntentClassifier::new().unwrap(),
            ResponseTable::builtin(),
            Box::new(random),
            Box::new(scheduler.clone()),
            Pacing::default(),
        );
        (controller, scheduler)
    }

    fn type_and_send(
        controller: &mut TurnController,
        state: &mut ConversationState,
        text: &str,
    ) -> SendOutcome {
        state.draft = text.to_string();
        controller.send(state)
    }

    /// Fires every scheduled event, returning what was scheduled
    fn run_timers(
        controller: &mut TurnController,
        scheduler: &RecordingScheduler,
        state: &mut ConversationState,
    ) -> Vec<(Duration, TurnEvent)> {
        let fired = scheduler.take();
        for (_, event) in &fired {
            controller.handle(state, *event);
        }
        fired
    }

    #[test]
    fn blank_send_is_a_no_op() {
        let (mut controller, scheduler) = controller(ScriptedRandom::default());
        let mut state = ConversationState::new();

        assert_eq!(type_and_send(&mut controller, &mut state, "   "), SendOutcome::Blank);
        assert_eq!(type_and_send(&mut controller, &mut state, ""), SendOutcome::Blank);
        assert!(state.messages().is_empty());
        assert!(!state.is_typing());
        assert!(scheduler.take().is_empty());
    }

    #[test]
    fn send_appends_user_message_and_starts_typing() {
        let (mut controller, scheduler) = controller(ScriptedRandom::new(&[], &[0.5]));
        let mut state = ConversationState::new();

        let outcome = type_and_send(&mut controller, &mut state, "Hello");
        assert_eq!(outcome, SendOutcome::Sent(TurnId(1)));
        assert_eq!(state.messages(), [Message::user("Hello")]);
        assert!(state.draft.is_empty());
        assert!(state.is_typing());
        assert!(controller.is_busy());

        assert_eq!(
            scheduler.take(),
            vec![(Duration::from_millis(1750), TurnEvent::ReplyDue(TurnId(1)))]
        );
    }

    #[test]
    fn greeting_turn_replies_happily() {
        let (mut controller, scheduler) = controller(ScriptedRandom::new(&[1], &[0.0]));
        let mut state = ConversationState::new();

        type_and_send(&mut controller, &mut state, "Hello");
        let fired = run_timers(&mut controller, &scheduler, &mut state);
        assert_eq!(fired[0].0, Duration::from_millis(1000));

        let greeting = ResponseTable::builtin().pool(Category::Greeting)[1].clone();
        assert_eq!(state.messages()[1], Message::ai(greeting));
        assert!(!state.is_typing());
        assert!(!controller.is_busy());
        assert_eq!(state.emotion(), EmotionTag::Happy);

        // emotion reset was scheduled by the reply
        let fired = run_timers(&mut controller, &scheduler, &mut state);
        assert_eq!(
            fired,
            vec![(Duration::from_millis(3000), TurnEvent::EmotionResetDue(TurnId(1)))]
        );
        assert_eq!(state.emotion(), EmotionTag::Neutral);
    }

    #[test]
    fn unmatched_input_gets_default_reply() {
        let (mut controller, _) = controller(ScriptedRandom::new(&[4], &[]));
        let reply = controller.get_response("tell me a joke");
        assert_eq!(reply.category, Category::Default);
        assert_eq!(reply.emotion, EmotionTag::Neutral);
        assert_eq!(reply.text, ResponseTable::builtin().pool(Category::Default)[4]);
    }

    #[test]
    fn get_response_draws_from_first_matching_pool() {
        let (mut controller, _) = controller(ScriptedRandom::new(&[0, 2], &[]));
        let table = ResponseTable::builtin();

        let reply = controller.get_response("what are you?");
        assert_eq!(reply.category, Category::What);
        assert_eq!(reply.emotion, EmotionTag::Contemplative);
        assert_eq!(reply.text, table.pool(Category::What)[0]);

        let reply = controller.get_response("how are you?");
        assert_eq!(reply.category, Category::How);
        assert_eq!(reply.emotion, EmotionTag::Thoughtful);
        assert_eq!(reply.text, table.pool(Category::How)[2]);
    }

    #[test]
    fn send_while_responding_is_ignored() {
        let (mut controller, scheduler) = controller(ScriptedRandom::default());
        let mut state = ConversationState::new();

        type_and_send(&mut controller, &mut state, "hi");
        let outcome = type_and_send(&mut controller, &mut state, "are you there?");

        assert_eq!(outcome, SendOutcome::Busy);
        assert_eq!(state.draft, "are you there?");
        assert_eq!(state.messages().len(), 1);
        assert_eq!(scheduler.take().len(), 1);
    }

    #[test]
    fn consecutive_turns_alternate_roles() {
        let (mut controller, scheduler) = controller(ScriptedRandom::default());
        let mut state = ConversationState::new();

        for (i, text) in ["Hello", "how are you?", "tell me a joke"].iter().enumerate() {
            assert_eq!(
                type_and_send(&mut controller, &mut state, text),
                SendOutcome::Sent(TurnId(i as u64 + 1))
            );
            run_timers(&mut controller, &scheduler, &mut state);
            assert!(!state.is_typing());
            assert_eq!(state.messages().len(), 2 * (i + 1));
        }

        let roles: Vec<Role> = state.messages().iter().map(Message::role).collect();
        assert_eq!(
            roles,
            [Role::User, Role::Ai, Role::User, Role::Ai, Role::User, Role::Ai]
        );
        assert_eq!(state.messages()[2].content(), "how are you?");
    }

    #[test]
    fn stale_emotion_reset_keeps_newer_emotion() {
        let (mut controller, scheduler) = controller(ScriptedRandom::default());
        let mut state = ConversationState::new();

        type_and_send(&mut controller, &mut state, "hello");
        run_timers(&mut controller, &scheduler, &mut state);
        let first_reset = scheduler.take();

        type_and_send(&mut controller, &mut state, "do you feel things?");
        run_timers(&mut controller, &scheduler, &mut state);
        assert_eq!(state.emotion(), EmotionTag::Curious);

        controller.handle(&mut state, first_reset[0].1);
        assert_eq!(state.emotion(), EmotionTag::Curious);

        run_timers(&mut controller, &scheduler, &mut state);
        assert_eq!(state.emotion(), EmotionTag::Neutral);
    }

    #[test]
    fn reply_for_unknown_turn_is_ignored() {
        let (mut controller, scheduler) = controller(ScriptedRandom::default());
        let mut state = ConversationState::new();

        controller.handle(&mut state, TurnEvent::ReplyDue(TurnId(9)));
        assert!(state.messages().is_empty());

        type_and_send(&mut controller, &mut state, "hello");
        controller.handle(&mut state, TurnEvent::ReplyDue(TurnId(9)));
        assert_eq!(state.messages().len(), 1);
        assert!(state.is_typing());

        run_timers(&mut controller, &scheduler, &mut state);
        assert_eq!(state.messages().len(), 2);

        // a duplicate delivery must not append a second reply
        controller.handle(&mut state, TurnEvent::ReplyDue(TurnId(1)));
        assert_eq!(state.messages().len(), 2);
    }

    #[test]
    fn thinking_delay_stays_within_pacing() {
        let pacing = Pacing::default();
        assert_eq!(pacing.thinking_delay(0.0), pacing.thinking_min);
        assert_eq!(pacing.thinking_delay(1.0), pacing.thinking_max);
        assert_eq!(pacing.thinking_delay(-3.0), pacing.thinking_min);
    }
}
