//! Screens of the app and the navigation collaborator.

use serde::{Deserialize, Serialize};

/// Every routable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    Splash,
    Onboarding,
    Dashboard,
    MoodTracker,
    AiChat,
    ReflectionJournal,
    GratitudeTracker,
    DoodleSpace,
    PrivateNotes,
    Profile,
    Challenges,
    CrisisResources,
    NotFound,
}

impl Screen {
    /// All screens that have a route of their own.
    pub const ROUTED: [Screen; 12] = [
        Screen::Splash,
        Screen::Onboarding,
        Screen::Dashboard,
        Screen::MoodTracker,
        Screen::AiChat,
        Screen::ReflectionJournal,
        Screen::GratitudeTracker,
        Screen::DoodleSpace,
        Screen::PrivateNotes,
        Screen::Profile,
        Screen::Challenges,
        Screen::CrisisResources,
    ];

    /// Route path for this screen.
    pub fn path(self) -> &'static str {
        match self {
            Screen::Splash => "/",
            Screen::Onboarding => "/onboarding",
            Screen::Dashboard => "/dashboard",
            Screen::MoodTracker => "/mood-tracker",
            Screen::AiChat => "/ai-chat",
            Screen::ReflectionJournal => "/reflection-journal",
            Screen::GratitudeTracker => "/gratitude-tracker",
            Screen::DoodleSpace => "/doodle-space",
            Screen::PrivateNotes => "/private-notes",
            Screen::Profile => "/profile",
            Screen::Challenges => "/challenges",
            Screen::CrisisResources => "/crisis-resources",
            Screen::NotFound => "*",
        }
    }

    /// Resolve a route path. Unknown paths map to [`Screen::NotFound`].
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ROUTED
            .into_iter()
            .find(|screen| screen.path() == path)
            .unwrap_or(Screen::NotFound)
    }

    /// Get display name for this screen.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Splash => "MindMate",
            Screen::Onboarding => "Welcome",
            Screen::Dashboard => "Dashboard",
            Screen::MoodTracker => "Mood Check-in",
            Screen::AiChat => "MindMate Buddy",
            Screen::ReflectionJournal => "Reflection Journal",
            Screen::GratitudeTracker => "Gratitude Tracker",
            Screen::DoodleSpace => "Mindful Doodle Space",
            Screen::PrivateNotes => "Private Notes",
            Screen::Profile => "Profile",
            Screen::Challenges => "Challenges",
            Screen::CrisisResources => "Crisis Resources",
            Screen::NotFound => "Page not found",
        }
    }
}

/// Navigation collaborator provided by the host.
pub trait Navigator {
    /// Go to `screen`.
    fn navigate(&mut self, screen: Screen);
}

/// In-memory navigator that records the visited screens.
#[derive(Debug, Clone)]
pub struct HistoryNavigator {
    history: Vec<Screen>,
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(Screen::Splash)
    }
}

impl HistoryNavigator {
    pub fn new(start: Screen) -> Self {
        Self {
            history: vec![start],
        }
    }

    /// The screen currently shown.
    pub fn current(&self) -> Screen {
        self.history.last().copied().unwrap_or(Screen::Splash)
    }

    /// All screens visited, oldest first.
    pub fn history(&self) -> &[Screen] {
        &self.history
    }

    /// Return to the previous screen. Returns false when already at the start.
    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&mut self, screen: Screen) {
        log::info!("Navigating to {}", screen.path());
        self.history.push(screen);
    }
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn navigate(&mut self, screen: Screen) {
        (**self).navigate(screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve() {
        for screen in Screen::ROUTED {
            assert_eq!(Screen::from_path(screen.path()), screen);
        }
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Screen::from_path("/nowhere"), Screen::NotFound);
    }

    #[test]
    fn test_trailing_slash_and_query() {
        assert_eq!(Screen::from_path("/doodle-space/"), Screen::DoodleSpace);
        assert_eq!(Screen::from_path("/dashboard?tab=1"), Screen::Dashboard);
        assert_eq!(Screen::from_path(""), Screen::Splash);
    }

    #[test]
    fn test_history_navigator() {
        let mut nav = HistoryNavigator::default();
        nav.navigate(Screen::Dashboard);
        nav.navigate(Screen::DoodleSpace);
        assert_eq!(nav.current(), Screen::DoodleSpace);

        assert!(nav.back());
        assert_eq!(nav.current(), Screen::Dashboard);
        assert!(nav.back());
        assert!(!nav.back());
        assert_eq!(nav.current(), Screen::Splash);
    }
}
