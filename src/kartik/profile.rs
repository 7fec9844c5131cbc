//! The card's content: who, how to reach them, and what they built.
//!
//! The data ships inside the binary as `profile.json` and is parsed once, on first
//! use, into an immutable [`Profile`]. Nothing mutates it afterwards.

use crate::error::Result;
use once_cell::sync::OnceCell;
use serde::Deserialize;

const BUILTIN_PROFILE: &str = include_str!("profile.json");

static BUILTIN: OnceCell<Profile> = OnceCell::new();

/// Colour used for a contact URL on the card.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Magenta,
    Green,
    Cyan,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub label: String,
    pub url: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub link: String,
}

/// Targets of the main menu actions, plus the full repository listing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Links {
    pub portfolio: String,
    pub email: String,
    pub github: String,
    pub resume: String,
    pub repositories: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub contacts: Vec<Contact>,
    pub links: Links,
    pub projects: Vec<Project>,
}

impl Profile {
    /// The profile compiled into the binary. Parsed on first call, cached afterwards.
    pub fn builtin() -> Result<&'static Profile> {
        BUILTIN.get_or_try_init(|| Profile::from_json(BUILTIN_PROFILE))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardError;

    #[test]
    fn test_builtin_profile_parses() {
        let profile = Profile::builtin().unwrap();
        assert_eq!(profile.name, "Kartik Labhshetwar");
        assert_eq!(profile.tagline, "Build ship grow.");
        assert_eq!(profile.contacts.len(), 3);
        assert_eq!(profile.projects.len(), 3);
    }

    #[test]
    fn test_builtin_profile_is_cached() {
        let a = Profile::builtin().unwrap();
        let b = Profile::builtin().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_project_order_is_stable() {
        let names: Vec<_> = Profile::builtin()
            .unwrap()
            .projects
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["LearnX", "Mind Mentor AI", "TaskMaster"]);
    }

    #[test]
    fn test_links_use_expected_schemes() {
        let links = &Profile::builtin().unwrap().links;
        assert!(links.email.starts_with("mailto:"));
        assert!(links.repositories.ends_with("?tab=repositories"));
        for url in [&links.portfolio, &links.github, &links.resume] {
            assert!(url.starts_with("https://"), "{url}");
        }
    }

    #[test]
    fn test_contact_accent_names() {
        let contact: Contact =
            serde_json::from_str(r#"{"label":"Web:","url":"https://x","accent":"cyan"}"#)
                .unwrap();
        assert_eq!(contact.accent, Accent::Cyan);
    }

    #[test]
    fn test_from_json_rejects_missing_fields() {
        let err = Profile::from_json(r#"{"name":"only a name"}"#).unwrap_err();
        assert!(matches!(err, CardError::Profile(_)));
    }
}
