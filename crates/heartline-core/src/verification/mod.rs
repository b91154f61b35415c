//! Profile verification domain module.
//!
//! A three step wizard (photos, personal information, review) that ends by
//! handing everything to a [`VerificationService`].

mod model;
mod service;
mod wizard;

pub use model::{PersonalInfo, PersonalInfoField, PhotoUpload};
pub use service::VerificationService;
pub use wizard::{VerificationWizard, WizardOutcome, WizardStep};
