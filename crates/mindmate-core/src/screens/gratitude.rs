//! Gratitude log.

use crate::milestone::{Badge, MilestoneKind};
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// How long the celebration shows after adding an entry.
pub const CELEBRATION_DURATION: Duration = Duration::from_millis(1500);

pub const GRATITUDE_PROMPTS: [&str; 6] = [
    "A person who made you smile today",
    "Something beautiful you noticed",
    "A comfort that brought you peace",
    "A small victory you achieved",
    "Something that made you laugh",
    "A moment of unexpected kindness",
];

#[derive(Debug, Clone, Default)]
pub struct GratitudeLog {
    items: Vec<String>,
    /// Text currently typed into the input box.
    pub draft: String,
    celebrate_until: Option<Instant>,
}

impl GratitudeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn count(&self) -> u32 {
        u32::try_from(self.items.len()).unwrap_or(u32::MAX)
    }

    /// Add an entry. Blank text is ignored and returns false.
    pub fn add(&mut self, text: &str, now: Instant) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.items.push(text.to_string());
        self.celebrate_until = Some(now + CELEBRATION_DURATION);
        true
    }

    /// Add the current draft and clear it.
    pub fn add_draft(&mut self, now: Instant) -> bool {
        let draft = std::mem::take(&mut self.draft);
        let added = self.add(&draft, now);
        if !added {
            self.draft = draft;
        }
        added
    }

    /// Whether the "added" celebration is visible at `now`.
    pub fn is_celebrating(&self, now: Instant) -> bool {
        self.celebrate_until.is_some_and(|until| now < until)
    }

    /// Badge earned on the gratitude milestone track.
    pub fn badge(&self) -> Option<Badge> {
        MilestoneKind::Gratitude.badge(self.count())
    }
}
