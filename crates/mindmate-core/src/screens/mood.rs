//! Mood check-in.

use crate::screen::{Navigator, Screen};
use serde::{Deserialize, Serialize};

/// A selectable mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mood {
    pub id: &'static str,
    pub emoji: &'static str,
    pub label: &'static str,
}

pub const MOODS: [Mood; 8] = [
    Mood {
        id: "joyful",
        emoji: "😄",
        label: "Joyful",
    },
    Mood {
        id: "content",
        emoji: "😊",
        label: "Content",
    },
    Mood {
        id: "calm",
        emoji: "😌",
        label: "Calm",
    },
    Mood {
        id: "neutral",
        emoji: "😐",
        label: "Neutral",
    },
    Mood {
        id: "anxious",
        emoji: "😰",
        label: "Anxious",
    },
    Mood {
        id: "sad",
        emoji: "😢",
        label: "Sad",
    },
    Mood {
        id: "angry",
        emoji: "😠",
        label: "Angry",
    },
    Mood {
        id: "tired",
        emoji: "😴",
        label: "Tired",
    },
];

/// Intensity scale, 1 (barely) to 5 (very strongly).
pub const INTENSITY_LEVELS: std::ops::RangeInclusive<u8> = 1..=5;

/// A completed check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: String,
    pub intensity: u8,
}

#[derive(Debug, Clone, Default)]
pub struct MoodCheckIn {
    mood: Option<&'static Mood>,
    intensity: Option<u8>,
}

impl MoodCheckIn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a mood by id. Unknown ids are ignored and return false.
    pub fn select_mood(&mut self, id: &str) -> bool {
        match MOODS.iter().find(|m| m.id == id) {
            Some(mood) => {
                self.mood = Some(mood);
                true
            }
            None => false,
        }
    }

    /// Select an intensity. Values outside 1..=5 are ignored and return false.
    pub fn select_intensity(&mut self, level: u8) -> bool {
        if INTENSITY_LEVELS.contains(&level) {
            self.intensity = Some(level);
            true
        } else {
            false
        }
    }

    pub fn mood(&self) -> Option<&'static Mood> {
        self.mood
    }

    pub fn intensity(&self) -> Option<u8> {
        self.intensity
    }

    /// Both a mood and an intensity are selected.
    pub fn can_save(&self) -> bool {
        self.mood.is_some() && self.intensity.is_some()
    }

    /// Record the check-in and return to the dashboard.
    /// Returns `None` (and stays on this screen) until both fields are set.
    pub fn save(&self, nav: &mut impl Navigator) -> Option<MoodEntry> {
        let (mood, intensity) = (self.mood?, self.intensity?);
        let entry = MoodEntry {
            mood: mood.id.to_string(),
            intensity,
        };
        log::info!("Saving mood: {} ({})", entry.mood, entry.intensity);
        nav.navigate(Screen::Dashboard);
        Some(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::HistoryNavigator;

    #[test]
    fn test_save_requires_both_fields() {
        let mut nav = HistoryNavigator::new(Screen::MoodTracker);
        let mut check_in = MoodCheckIn::new();

        assert!(check_in.save(&mut nav).is_none());
        check_in.select_mood("calm");
        assert!(check_in.save(&mut nav).is_none());
        assert_eq!(nav.current(), Screen::MoodTracker);

        check_in.select_intensity(4);
        let entry = check_in.save(&mut nav).unwrap();
        assert_eq!(entry.mood, "calm");
        assert_eq!(entry.intensity, 4);
        assert_eq!(nav.current(), Screen::Dashboard);
    }

    #[test]
    fn test_invalid_selections_ignored() {
        let mut check_in = MoodCheckIn::new();
        assert!(!check_in.select_mood("ecstatic"));
        assert!(!check_in.select_intensity(0));
        assert!(!check_in.select_intensity(6));
        assert!(!check_in.can_save());
    }
}
