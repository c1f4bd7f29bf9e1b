//! Onboarding flow.

use crate::screen::{Navigator, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingStep {
    pub title: &'static str,
    pub description: &'static str,
    /// This step asks the user to pick wellness goals.
    pub goal_selection: bool,
}

pub const ONBOARDING_STEPS: [OnboardingStep; 4] = [
    OnboardingStep {
        title: "Welcome to MindMate! 🌈",
        description: "Your personal wellness companion is here to support you every step of the way.",
        goal_selection: false,
    },
    OnboardingStep {
        title: "Track Your Emotions 💭",
        description: "Daily mood check-ins with beautiful visualizations and gentle insights.",
        goal_selection: false,
    },
    OnboardingStep {
        title: "AI Buddy Support 🤖✨",
        description: "Chat with your caring AI companion anytime you need emotional support or just want to talk.",
        goal_selection: false,
    },
    OnboardingStep {
        title: "What are your wellness goals?",
        description: "Select what you'd like to focus on (you can change these later):",
        goal_selection: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellnessGoal {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

pub const WELLNESS_GOALS: [WellnessGoal; 6] = [
    WellnessGoal {
        id: "mood",
        label: "Track my mood",
        emoji: "😊",
    },
    WellnessGoal {
        id: "anxiety",
        label: "Manage anxiety",
        emoji: "🌸",
    },
    WellnessGoal {
        id: "sleep",
        label: "Better sleep",
        emoji: "🌙",
    },
    WellnessGoal {
        id: "stress",
        label: "Reduce stress",
        emoji: "🧘‍♀️",
    },
    WellnessGoal {
        id: "gratitude",
        label: "Practice gratitude",
        emoji: "🙏",
    },
    WellnessGoal {
        id: "mindfulness",
        label: "Daily mindfulness",
        emoji: "🧠",
    },
];

#[derive(Debug, Clone, Default)]
pub struct Onboarding {
    step: usize,
    goals: Vec<&'static str>,
}

impl Onboarding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step_index(&self) -> usize {
        self.step
    }

    pub fn current(&self) -> &'static OnboardingStep {
        &ONBOARDING_STEPS[self.step]
    }

    pub fn is_last_step(&self) -> bool {
        self.step + 1 == ONBOARDING_STEPS.len()
    }

    /// Advance one step; on the last step, finish and go to the dashboard.
    pub fn next(&mut self, nav: &mut impl Navigator) {
        if self.is_last_step() {
            log::info!("Onboarding finished with goals {:?}", self.goals);
            nav.navigate(Screen::Dashboard);
        } else {
            self.step += 1;
        }
    }

    /// Go back one step. Returns false on the first step.
    pub fn previous(&mut self) -> bool {
        if self.step > 0 {
            self.step -= 1;
            true
        } else {
            false
        }
    }

    /// Toggle a goal on or off. Unknown ids are ignored and return false.
    pub fn toggle_goal(&mut self, id: &str) -> bool {
        let Some(goal) = WELLNESS_GOALS.iter().find(|g| g.id == id) else {
            return false;
        };
        if let Some(pos) = self.goals.iter().position(|g| *g == goal.id) {
            self.goals.remove(pos);
        } else {
            self.goals.push(goal.id);
        }
        true
    }

    /// Selected goal ids, in selection order.
    pub fn goals(&self) -> &[&'static str] {
        &self.goals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::HistoryNavigator;

    #[test]
    fn test_walk_through_steps() {
        let mut nav = HistoryNavigator::new(Screen::Onboarding);
        let mut flow = Onboarding::new();

        assert!(!flow.previous());
        for _ in 0..3 {
            flow.next(&mut nav);
        }
        assert!(flow.is_last_step());
        assert!(flow.current().goal_selection);
        assert_eq!(nav.current(), Screen::Onboarding);

        flow.next(&mut nav);
        assert_eq!(nav.current(), Screen::Dashboard);
    }

    #[test]
    fn test_toggle_goal() {
        let mut flow = Onboarding::new();
        assert!(flow.toggle_goal("sleep"));
        assert!(flow.toggle_goal("stress"));
        assert_eq!(flow.goals(), &["sleep", "stress"]);

        assert!(flow.toggle_goal("sleep"));
        assert_eq!(flow.goals(), &["stress"]);
        assert!(!flow.toggle_goal("flying"));
    }
}
