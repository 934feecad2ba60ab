//! Editable profile data.
//!
//! `ProfileFields` carries the five free-text fields shown in the editor.
//! There are no cross-field invariants and no format constraints: any string,
//! including the empty string, is a valid value for every field.

use serde::{Deserialize, Serialize};

/// Identifies one editable text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Bio,
    Email,
    Phone,
    Website,
}

impl ProfileField {
    /// All fields in form order
    pub fn all() -> &'static [ProfileField] {
        &[
            ProfileField::Name,
            ProfileField::Bio,
            ProfileField::Email,
            ProfileField::Phone,
            ProfileField::Website,
        ]
    }

    /// Form label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Name:",
            ProfileField::Bio => "About Me:",
            ProfileField::Email => "Email:",
            ProfileField::Phone => "Phone:",
            ProfileField::Website => "Website:",
        }
    }

    /// Hint text shown inside an empty input
    pub fn placeholder(&self) -> &'static str {
        match self {
            ProfileField::Name => "Your Name",
            ProfileField::Bio => "Tell us about yourself",
            ProfileField::Email => "Your Email",
            ProfileField::Phone => "Your Phone Number",
            ProfileField::Website => "Your Website URL",
        }
    }

    /// Whether the input spans multiple lines
    pub fn is_multiline(&self) -> bool {
        matches!(self, ProfileField::Bio)
    }
}

/// Current value of every editable profile field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFields {
    #[serde(default = "crate::defaults::profile_name")]
    pub name: String,

    #[serde(default = "crate::defaults::profile_bio")]
    pub bio: String,

    #[serde(default = "crate::defaults::profile_email")]
    pub email: String,

    #[serde(default = "crate::defaults::profile_phone")]
    pub phone: String,

    #[serde(default = "crate::defaults::profile_website")]
    pub website: String,
}

impl Default for ProfileFields {
    fn default() -> Self {
        Self {
            name: crate::defaults::profile_name(),
            bio: crate::defaults::profile_bio(),
            email: crate::defaults::profile_email(),
            phone: crate::defaults::profile_phone(),
            website: crate::defaults::profile_website(),
        }
    }
}

impl ProfileFields {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Bio => &self.bio,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Website => &self.website,
        }
    }

    pub fn get_mut(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Bio => &mut self.bio,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Website => &mut self.website,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_starting_profile() {
        let fields = ProfileFields::default();
        assert_eq!(fields.name, "John Doe");
        assert_eq!(fields.email, "john.doe@example.com");
        assert_eq!(fields.phone, "(123) 456-7890");
        assert_eq!(fields.website, "example.com");
        assert!(fields.bio.starts_with("Lorem ipsum"));
        assert!(fields.bio.ends_with("magna aliqua."));
    }

    #[test]
    fn test_get_mut_targets_matching_field() {
        let mut fields = ProfileFields::default();
        for field in ProfileField::all() {
            *fields.get_mut(*field) = format!("{field:?}");
        }
        assert_eq!(fields.get(ProfileField::Name), "Name");
        assert_eq!(fields.get(ProfileField::Bio), "Bio");
        assert_eq!(fields.get(ProfileField::Email), "Email");
        assert_eq!(fields.get(ProfileField::Phone), "Phone");
        assert_eq!(fields.get(ProfileField::Website), "Website");
    }

    #[test]
    fn test_only_bio_is_multiline() {
        let multiline: Vec<_> = ProfileField::all()
            .iter()
            .filter(|f| f.is_multiline())
            .collect();
        assert_eq!(multiline, vec![&ProfileField::Bio]);
    }
}
