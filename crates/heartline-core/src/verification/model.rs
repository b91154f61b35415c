use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// A photo picked by the user. Only metadata is kept client side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoUpload {
    pub file_name: String,
    pub size_bytes: u64,
}

impl PhotoUpload {
    pub fn new(file_name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
        }
    }
}

/// Editable fields of the personal information step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PersonalInfoField {
    Name,
    Birthdate,
    Gender,
    Interests,
    Bio,
}

/// Answers collected in step two. Values are kept exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub birthdate: String,
    pub gender: String,
    /// Comma-separated list as entered.
    pub interests: String,
    pub bio: String,
}

impl PersonalInfo {
    pub fn get(&self, field: PersonalInfoField) -> &str {
        match field {
            PersonalInfoField::Name => &self.name,
            PersonalInfoField::Birthdate => &self.birthdate,
            PersonalInfoField::Gender => &self.gender,
            PersonalInfoField::Interests => &self.interests,
            PersonalInfoField::Bio => &self.bio,
        }
    }

    pub fn set(&mut self, field: PersonalInfoField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PersonalInfoField::Name => self.name = value,
            PersonalInfoField::Birthdate => self.birthdate = value,
            PersonalInfoField::Gender => self.gender = value,
            PersonalInfoField::Interests => self.interests = value,
            PersonalInfoField::Bio => self.bio = value,
        }
    }

    /// Required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<PersonalInfoField> {
        PersonalInfoField::iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Interests split on commas with blanks dropped.
    pub fn interest_list(&self) -> Vec<String> {
        self.interests
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}
