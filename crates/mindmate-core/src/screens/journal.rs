//! Reflection journal.

use crate::rng::SimpleRng;
use crate::screen::{Navigator, Screen};

pub const FALLBACK_QUESTION: &str = "How are you feeling right now?";

/// A journal mood and the reflection questions offered for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalMood {
    pub id: &'static str,
    pub emoji: &'static str,
    pub label: &'static str,
    pub questions: [&'static str; 3],
}

pub const JOURNAL_MOODS: [JournalMood; 4] = [
    JournalMood {
        id: "joyful",
        emoji: "😊",
        label: "Joyful",
        questions: [
            "What brought you the most joy today?",
            "How can you share this happiness with others?",
            "What small moment made you smile?",
        ],
    },
    JournalMood {
        id: "peaceful",
        emoji: "😌",
        label: "Peaceful",
        questions: [
            "What helped you feel most at peace today?",
            "How did you create calm in your day?",
            "What would you like to release before tomorrow?",
        ],
    },
    JournalMood {
        id: "anxious",
        emoji: "😰",
        label: "Anxious",
        questions: [
            "What's one thing that went well today despite your worries?",
            "How can you be gentle with yourself right now?",
            "What would you tell a dear friend feeling this way?",
        ],
    },
    JournalMood {
        id: "grateful",
        emoji: "🙏",
        label: "Grateful",
        questions: [
            "What are three things you're grateful for right now?",
            "Who in your life deserves appreciation today?",
            "What simple pleasure brought you comfort?",
        ],
    },
];

#[derive(Debug, Clone)]
pub struct ReflectionJournal {
    mood: Option<&'static JournalMood>,
    question: &'static str,
    /// Reflection text being written.
    pub reflection: String,
    rng: SimpleRng,
}

impl ReflectionJournal {
    pub fn new(rng: SimpleRng) -> Self {
        Self {
            mood: None,
            question: FALLBACK_QUESTION,
            reflection: String::new(),
            rng,
        }
    }

    /// Select a mood and draw one of its questions. Unknown ids clear the
    /// selection and fall back to the generic question.
    pub fn select_mood(&mut self, id: &str) -> &'static str {
        self.mood = JOURNAL_MOODS.iter().find(|m| m.id == id);
        self.question = match self.mood {
            Some(mood) => self
                .rng
                .choose(&mood.questions)
                .copied()
                .unwrap_or(FALLBACK_QUESTION),
            None => FALLBACK_QUESTION,
        };
        self.question
    }

    pub fn mood(&self) -> Option<&'static JournalMood> {
        self.mood
    }

    /// The prompt currently shown.
    pub fn question(&self) -> &'static str {
        self.question
    }

    /// Save the reflection and return to the dashboard.
    /// Blank reflections are not saved and return false.
    pub fn save(&mut self, nav: &mut impl Navigator) -> bool {
        if self.reflection.trim().is_empty() {
            return false;
        }
        log::info!("Reflection saved ({} chars)", self.reflection.chars().count());
        nav.navigate(Screen::Dashboard);
        true
    }
}

impl Default for ReflectionJournal {
    fn default() -> Self {
        Self::new(SimpleRng::from_entropy())
    }
}
