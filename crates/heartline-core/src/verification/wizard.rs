//! Linear verification wizard.

use serde::Serialize;

use super::model::{PersonalInfo, PersonalInfoField, PhotoUpload};
use crate::error::{HeartlineError, Result};

/// Wizard page. Steps only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum WizardStep {
    Photos,
    PersonalInfo,
    Review,
}

impl WizardStep {
    /// 1-based position shown in the progress dots.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Photos => 1,
            WizardStep::PersonalInfo => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Photos => "Upload Photos",
            WizardStep::PersonalInfo => "Personal Information",
            WizardStep::Review => "Review and Submit",
        }
    }

    fn next(self) -> Option<WizardStep> {
        match self {
            WizardStep::Photos => Some(WizardStep::PersonalInfo),
            WizardStep::PersonalInfo => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }
}

/// Result of pressing the wizard's submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Moved on to the given step.
    Advanced(WizardStep),
    /// The review step was submitted. Reported once per wizard.
    Completed,
    /// The wizard had already completed; nothing happened.
    AlreadyCompleted,
}

/// Three step verification form.
///
/// Photos are optional even though the upload copy asks for three to five.
/// Step two requires every personal information field to be non-empty.
#[derive(Debug, Clone)]
pub struct VerificationWizard {
    step: WizardStep,
    photos: Vec<PhotoUpload>,
    personal_info: PersonalInfo,
    completed: bool,
}

impl Default for VerificationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationWizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Photos,
            photos: Vec::new(),
            personal_info: PersonalInfo::default(),
            completed: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn photos(&self) -> &[PhotoUpload] {
        &self.photos
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Label of the submit button for the current step.
    pub fn submit_label(&self) -> &'static str {
        match self.step {
            WizardStep::Review => "Submit for Verification",
            _ => "Next",
        }
    }

    /// Adds picked photos after the ones already chosen.
    pub fn add_photos(&mut self, photos: impl IntoIterator<Item = PhotoUpload>) {
        self.photos.extend(photos);
        tracing::debug!(count = self.photos.len(), "Verification photos updated");
    }

    pub fn set_field(&mut self, field: PersonalInfoField, value: impl Into<String>) {
        self.personal_info.set(field, value);
    }

    /// Submits the current step.
    ///
    /// Steps one and two advance; step three completes the wizard.
    pub fn submit(&mut self) -> Result<WizardOutcome> {
        if self.completed {
            return Ok(WizardOutcome::AlreadyCompleted);
        }

        if self.step == WizardStep::PersonalInfo {
            if let Some(field) = self.personal_info.missing_fields().first() {
                return Err(HeartlineError::validation(
                    field.to_string(),
                    "this field is required",
                ));
            }
        }

        match self.step.next() {
            Some(next) => {
                tracing::debug!(from = self.step.number(), to = next.number(), "Wizard advanced");
                self.step = next;
                Ok(WizardOutcome::Advanced(next))
            }
            None => {
                self.completed = true;
                tracing::info!(photos = self.photos.len(), "Verification wizard completed");
                Ok(WizardOutcome::Completed)
            }
        }
    }

    /// Returns a completed wizard to the review step so it can be resubmitted
    /// after the backend rejected it.
    pub fn reopen(&mut self) {
        if self.completed {
            self.completed = false;
            tracing::debug!("Verification wizard reopened");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_info(wizard: &mut VerificationWizard) {
        wizard.set_field(PersonalInfoField::Name, "Jamie");
        wizard.set_field(PersonalInfoField::Birthdate, "1994-05-01");
        wizard.set_field(PersonalInfoField::Gender, "Woman");
        wizard.set_field(PersonalInfoField::Interests, "Climbing, Tea");
        wizard.set_field(PersonalInfoField::Bio, "Hello");
    }

    #[test]
    fn test_full_traversal_completes_once_without_photos() {
        let mut wizard = VerificationWizard::new();
        assert_eq!(wizard.step().number(), 1);
        assert_eq!(
            wizard.submit().unwrap(),
            WizardOutcome::Advanced(WizardStep::PersonalInfo)
        );
        fill_info(&mut wizard);
        assert_eq!(
            wizard.submit().unwrap(),
            WizardOutcome::Advanced(WizardStep::Review)
        );
        assert_eq!(wizard.submit_label(), "Submit for Verification");
        assert_eq!(wizard.submit().unwrap(), WizardOutcome::Completed);
        assert_eq!(wizard.submit().unwrap(), WizardOutcome::AlreadyCompleted);
        assert!(wizard.is_completed());
    }

    #[test]
    fn test_photo_count_does_not_matter() {
        for count in [0u64, 1, 7] {
            let mut wizard = VerificationWizard::new();
            wizard.add_photos((0..count).map(|i| PhotoUpload::new(format!("{i}.png"), 1024)));
            wizard.submit().unwrap();
            fill_info(&mut wizard);
            wizard.submit().unwrap();
            assert_eq!(wizard.submit().unwrap(), WizardOutcome::Completed);
            assert_eq!(wizard.photos().len() as u64, count);
        }
    }

    #[test]
    fn test_personal_info_step_requires_fields() {
        let mut wizard = VerificationWizard::new();
        wizard.submit().unwrap();
        wizard.set_field(PersonalInfoField::Name, "Jamie");

        let err = wizard.submit().unwrap_err();
        assert_eq!(err, HeartlineError::validation("birthdate", "this field is required"));
        assert_eq!(wizard.step(), WizardStep::PersonalInfo);
    }

    #[test]
    fn test_photos_accumulate() {
        let mut wizard = VerificationWizard::new();
        wizard.add_photos([PhotoUpload::new("a.jpg", 1)]);
        wizard.add_photos([PhotoUpload::new("b.jpg", 2), PhotoUpload::new("c.jpg", 3)]);
        let names: Vec<&str> = wizard.photos().iter().map(|p| p.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_reopen_allows_resubmission() {
        let mut wizard = VerificationWizard::new();
        wizard.submit().unwrap();
        fill_info(&mut wizard);
        wizard.submit().unwrap();
        assert_eq!(wizard.submit().unwrap(), WizardOutcome::Completed);

        wizard.reopen();
        assert!(!wizard.is_completed());
        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(wizard.submit().unwrap(), WizardOutcome::Completed);
    }
}
