//! Profile view and editor.

use crate::notify::{Notifier, Toast};
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_BIO_LEN: usize = 200;

/// Profile validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be 50 characters or less")]
    NameTooLong,
    #[error("Bio must be 200 characters or less")]
    BioTooLong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub join_date: String,
    pub profile_image: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Alex".to_string(),
            email: "alex@mindmate.com".to_string(),
            bio: "Finding peace in small moments and gratitude in everyday life. Mental wellness is a journey, not a destination.".to_string(),
            join_date: "January 2024".to_string(),
            profile_image: String::new(),
        }
    }
}

/// Editable fields of the profile form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub bio: String,
    pub profile_image: String,
}

impl ProfileForm {
    fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            bio: profile.bio.clone(),
            profile_image: profile.profile_image.clone(),
        }
    }

    /// Check the form. All failing fields are reported.
    pub fn validate(&self) -> Vec<ProfileError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ProfileError::NameRequired);
        } else if self.name.chars().count() > MAX_NAME_LEN {
            errors.push(ProfileError::NameTooLong);
        }
        if self.bio.chars().count() > MAX_BIO_LEN {
            errors.push(ProfileError::BioTooLong);
        }
        errors
    }
}

/// Profile screen state: the saved profile and, while editing, the form.
#[derive(Debug, Clone, Default)]
pub struct ProfileEditor {
    profile: UserProfile,
    form: Option<ProfileForm>,
}

impl ProfileEditor {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            form: None,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn is_editing(&self) -> bool {
        self.form.is_some()
    }

    /// Open the form pre-filled with the saved profile.
    pub fn edit(&mut self) -> &mut ProfileForm {
        self.form.insert(ProfileForm::from_profile(&self.profile))
    }

    pub fn form_mut(&mut self) -> Option<&mut ProfileForm> {
        self.form.as_mut()
    }

    /// Discard the form.
    pub fn cancel(&mut self) {
        self.form = None;
    }

    /// Validate and apply the form, then show the "Profile Updated" toast.
    /// On failure the form stays open. Saving while not editing is a no-op.
    pub fn save(&mut self, notifier: &mut impl Notifier) -> Result<(), Vec<ProfileError>> {
        let Some(form) = &self.form else {
            return Ok(());
        };

        let errors = form.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        if let Some(form) = self.form.take() {
            self.profile.name = form.name;
            self.profile.bio = form.bio;
            self.profile.profile_image = form.profile_image;
        }
        notifier.notify(Toast::new(
            "Profile Updated",
            "Your profile has been saved successfully!",
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastQueue;

    #[test]
    fn test_validation() {
        let form = ProfileForm {
            name: "   ".to_string(),
            bio: "x".repeat(201),
            profile_image: String::new(),
        };
        assert_eq!(
            form.validate(),
            vec![ProfileError::NameRequired, ProfileError::BioTooLong]
        );

        let form = ProfileForm {
            name: "n".repeat(51),
            ..Default::default()
        };
        assert_eq!(form.validate(), vec![ProfileError::NameTooLong]);
    }

    #[test]
    fn test_save_applies_and_notifies() {
        let mut toasts = ToastQueue::new();
        let mut editor = ProfileEditor::default();

        editor.edit().name = "Sam".to_string();
        editor.save(&mut toasts).unwrap();

        assert_eq!(editor.profile().name, "Sam");
        assert!(!editor.is_editing());
        assert_eq!(toasts.last().map(|t| t.title.as_str()), Some("Profile Updated"));
    }

    #[test]
    fn test_invalid_save_keeps_form_open() {
        let mut toasts = ToastQueue::new();
        let mut editor = ProfileEditor::default();

        editor.edit().name.clear();
        assert_eq!(editor.save(&mut toasts), Err(vec![ProfileError::NameRequired]));
        assert!(editor.is_editing());
        assert_eq!(editor.profile().name, "Alex");
        assert!(toasts.toasts().is_empty());
    }

    #[test]
    fn test_cancel_discards_changes() {
        let mut editor = ProfileEditor::default();
        editor.edit().bio = "changed".to_string();
        editor.cancel();
        assert!(!editor.is_editing());
        assert_ne!(editor.profile().bio, "changed");
    }
}
