//! Wellness challenges.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeKind {
    Daily,
    Streak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub progress: u32,
    pub target: u32,
    pub kind: ChallengeKind,
}

impl Challenge {
    /// Progress toward the target as a whole percentage, capped at 100.
    pub fn percent(&self) -> u32 {
        if self.target == 0 {
            return 100;
        }
        (self.progress.saturating_mul(100) / self.target).min(100)
    }
}

pub const CHALLENGES: [Challenge; 4] = [
    Challenge {
        id: "hydration",
        title: "Hydration Hero",
        description: "Drink 8 glasses of water daily for 7 days",
        progress: 5,
        target: 7,
        kind: ChallengeKind::Daily,
    },
    Challenge {
        id: "gratitude",
        title: "Gratitude Garden",
        description: "Write 3 things you're grateful for each day",
        progress: 12,
        target: 30,
        kind: ChallengeKind::Daily,
    },
    Challenge {
        id: "mindfulness",
        title: "Mindful Moments",
        description: "Practice 5 minutes of mindfulness daily",
        progress: 8,
        target: 14,
        kind: ChallengeKind::Daily,
    },
    Challenge {
        id: "reflection",
        title: "Reflection Streak",
        description: "Complete daily reflection for 21 days",
        progress: 15,
        target: 21,
        kind: ChallengeKind::Streak,
    },
];

/// Which challenges the user has marked complete.
#[derive(Debug, Clone, Default)]
pub struct ChallengeBoard {
    completed: Vec<&'static str>,
}

impl ChallengeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn challenges(&self) -> &'static [Challenge] {
        &CHALLENGES
    }

    /// Flip a challenge between complete and incomplete.
    /// Unknown ids are ignored and return false.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(challenge) = CHALLENGES.iter().find(|c| c.id == id) else {
            return false;
        };
        if let Some(pos) = self.completed.iter().position(|c| *c == challenge.id) {
            self.completed.remove(pos);
        } else {
            self.completed.push(challenge.id);
        }
        true
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.iter().any(|c| *c == id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}
