//! Milestone badges derived from activity counters.

use serde::{Deserialize, Serialize};

/// Number of tiers on every milestone track.
pub const MILESTONE_TIERS: usize = 5;

/// Number of distinct badge color gradients per kind.
const BADGE_COLORS: usize = 3;

/// Activity a milestone track counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MilestoneKind {
    Reflection,
    Gratitude,
    Mood,
    Consistency,
}

/// An earned badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub kind: MilestoneKind,
    /// Tier reached, 1..=5.
    pub level: usize,
    pub title: &'static str,
    /// Which of the kind's three color gradients to show.
    pub color_index: usize,
}

impl MilestoneKind {
    pub const ALL: [MilestoneKind; 4] = [
        MilestoneKind::Reflection,
        MilestoneKind::Gratitude,
        MilestoneKind::Mood,
        MilestoneKind::Consistency,
    ];

    /// Counts at which each tier unlocks, ascending.
    pub fn thresholds(self) -> &'static [u32; MILESTONE_TIERS] {
        match self {
            MilestoneKind::Reflection => &[1, 3, 7, 14, 30],
            MilestoneKind::Gratitude => &[1, 5, 10, 21, 50],
            MilestoneKind::Mood => &[1, 7, 14, 30, 60],
            MilestoneKind::Consistency => &[3, 7, 14, 21, 30],
        }
    }

    /// Badge title for each tier.
    pub fn titles(self) -> &'static [&'static str; MILESTONE_TIERS] {
        match self {
            MilestoneKind::Reflection => &[
                "Thoughtful Soul",
                "Deep Thinker",
                "Wisdom Seeker",
                "Reflection Master",
                "Mindful Sage",
            ],
            MilestoneKind::Gratitude => &[
                "Grateful Heart",
                "Thankful Spirit",
                "Appreciation Angel",
                "Gratitude Guru",
                "Blessing Counter",
            ],
            MilestoneKind::Mood => &[
                "Mood Tracker",
                "Feeling Explorer",
                "Emotion Expert",
                "Mood Master",
                "Feeling Sage",
            ],
            MilestoneKind::Consistency => &[
                "Consistent Star",
                "Daily Champion",
                "Habit Hero",
                "Routine Royalty",
                "Consistency King/Queen",
            ],
        }
    }

    /// Number of tiers reached with `count` (0 = nothing earned yet).
    pub fn level(self, count: u32) -> usize {
        self.thresholds().iter().filter(|&&t| count >= t).count()
    }

    /// The next threshold above `count`, or the top threshold once all are reached.
    pub fn next_milestone(self, count: u32) -> u32 {
        let thresholds = self.thresholds();
        thresholds
            .iter()
            .copied()
            .find(|&t| count < t)
            .unwrap_or(thresholds[MILESTONE_TIERS - 1])
    }

    /// Whether `count` lands exactly on a threshold (a tier was just unlocked).
    pub fn is_unlock(self, count: u32) -> bool {
        self.thresholds().contains(&count)
    }

    /// The badge earned with `count`, or `None` before the first tier.
    pub fn badge(self, count: u32) -> Option<Badge> {
        let level = self.level(count);
        if level == 0 {
            return None;
        }
        Some(Badge {
            kind: self,
            level,
            title: self.titles()[level - 1],
            color_index: (level - 1).min(BADGE_COLORS - 1),
        })
    }
}
