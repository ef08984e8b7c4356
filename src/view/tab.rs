//! Record section tabs.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabParseError {
    #[error("Unknown tab '{0}' (expected one of: contact, experience, education, skills, other)")]
    Unknown(String),
}

/// The record section currently shown in every panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Contact,
    Experience,
    Education,
    Skills,
    Other,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 5] = [
        Tab::Contact,
        Tab::Experience,
        Tab::Education,
        Tab::Skills,
        Tab::Other,
    ];

    /// Lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Tab::Contact => "contact",
            Tab::Experience => "experience",
            Tab::Education => "education",
            Tab::Skills => "skills",
            Tab::Other => "other",
        }
    }

    /// Title shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Contact => "Contact",
            Tab::Experience => "Experience",
            Tab::Education => "Education",
            Tab::Skills => "Skills",
            Tab::Other => "Other",
        }
    }

    /// Section heading shown above the panels.
    pub fn heading(self) -> &'static str {
        match self {
            Tab::Contact => "Contact & Summary",
            Tab::Experience => "Work Experience",
            Tab::Education => "Education",
            Tab::Skills => "Skills & Languages",
            Tab::Other => "Certifications, Projects & More",
        }
    }

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Tab for a 1-based number key.
    pub fn from_number(n: usize) -> Option<Tab> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tab {
    type Err = TabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| TabParseError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_contact() {
        assert_eq!(Tab::default(), Tab::Contact);
    }

    #[test]
    fn cycling_wraps_both_ways() {
        assert_eq!(Tab::Other.next(), Tab::Contact);
        assert_eq!(Tab::Contact.prev(), Tab::Other);
        assert_eq!(Tab::Experience.next(), Tab::Education);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Skills".parse::<Tab>(), Ok(Tab::Skills));
        assert_eq!(" other ".parse::<Tab>(), Ok(Tab::Other));
        assert_eq!(
            "summary".parse::<Tab>(),
            Err(TabParseError::Unknown("summary".to_string()))
        );
    }

    #[test]
    fn number_keys_are_one_based() {
        assert_eq!(Tab::from_number(1), Some(Tab::Contact));
        assert_eq!(Tab::from_number(5), Some(Tab::Other));
        assert_eq!(Tab::from_number(0), None);
        assert_eq!(Tab::from_number(6), None);
    }
}
