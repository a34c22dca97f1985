pub mod conversation;
pub mod intent;
pub mod responses;
pub mod scheduler;
pub mod selector;
pub mod turn;

pub use conversation::{ConversationState, Message, Role};
pub use intent::{EmotionTag, IntentClassifier};
pub use responses::ResponseTable;
pub use scheduler::TokioScheduler;
pub use selector::SystemRandom;
pub use turn::{Pacing, SendOutcome, TurnController, TurnEvent};
