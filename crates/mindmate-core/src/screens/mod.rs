//! Per-screen form state.
//!
//! Each container holds the local state of one screen and talks to the host
//! only through the [`Navigator`](crate::screen::Navigator) and
//! [`Notifier`](crate::notify::Notifier) collaborators.

mod challenges;
mod gratitude;
mod journal;
mod mood;
mod notes;
mod onboarding;
mod profile;

pub use challenges::{CHALLENGES, Challenge, ChallengeBoard, ChallengeKind};
pub use gratitude::{CELEBRATION_DURATION, GRATITUDE_PROMPTS, GratitudeLog};
pub use journal::{FALLBACK_QUESTION, JOURNAL_MOODS, JournalMood, ReflectionJournal};
pub use mood::{INTENSITY_LEVELS, MOODS, Mood, MoodCheckIn, MoodEntry};
pub use notes::{Note, PrivateNotes, UNTITLED_NOTE};
pub use onboarding::{ONBOARDING_STEPS, Onboarding, OnboardingStep, WELLNESS_GOALS, WellnessGoal};
pub use profile::{MAX_BIO_LEN, MAX_NAME_LEN, ProfileEditor, ProfileError, ProfileForm, UserProfile};
