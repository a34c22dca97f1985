/// Rule-based intent matching: ordered regex rules, first match wins
use super::responses::Category;
use anyhow::{Context, Result};
use regex::Regex;

/// Mood shown in the header while a reply is fresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmotionTag {
    #[default]
    Neutral,
    Happy,
    Thoughtful,
    Contemplative,
    Curious,
}

impl EmotionTag {
    pub fn glyph(self) -> &'static str {
        match self {
            EmotionTag::Happy => "😊",
            EmotionTag::Thoughtful => "🤔",
            EmotionTag::Contemplative => "💭",
            EmotionTag::Curious => "🧐",
            EmotionTag::Neutral => "😌",
        }
    }
}

/// Classification result: the category and the emotion that goes with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    pub category: Category,
    pub emotion: EmotionTag,
}

impl Intent {
    pub const FALLBACK: Intent = Intent {
        category: Category::Default,
        emotion: EmotionTag::Neutral,
    };
}

// Priority order matters: "how do you feel" must land in How, not Feel.
// Only the start of a phrase is anchored, so "hiya" greets but "this" does not.
const RULES: &[(&str, Category, EmotionTag)] = &[
    (
        r"\b(hello|hi|hey|greetings)",
        Category::Greeting,
        EmotionTag::Happy,
    ),
    (
        r"\b(how are you|how're you|how do you feel)",
        Category::How,
        EmotionTag::Thoughtful,
    ),
    (
        r"\b(what are you|who are you)",
        Category::What,
        EmotionTag::Contemplative,
    ),
    (
        r"\b(do you feel|can you feel|emotions)",
        Category::Feel,
        EmotionTag::Curious,
    ),
    (
        r"\b(what do you think|your thoughts|your opinion)",
        Category::Think,
        EmotionTag::Thoughtful,
    ),
];

struct Rule {
    pattern: Regex,
    intent: Intent,
}

pub struct IntentClassifier {
    rules: Vec<Rule>,
}

impl IntentClassifier {
    pub fn new() -> Result<Self> {
        let rules = RULES
            .iter()
            .map(|(pattern, category, emotion)| {
                let pattern = Regex::new(pattern)
                    .with_context(|| format!("Intent rule for '{}' does not compile", category))?;
                Ok(Rule {
                    pattern,
                    intent: Intent {
                        category: *category,
                        emotion: *emotion,
                    },
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    pub fn classify(&self, text: &str) -> Intent {
        let text = text.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.pattern.is_match(&text))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::FALLBACK)
    }
}
