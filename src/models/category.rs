//! Report category model
//!
//! A report is either a Gang report or a Family report. The category picks the
//! evidence schema and the header wording of the crimes section.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::evidence::{EvidenceField, FAMILY_SCHEMA, GANG_SCHEMA};

/// Which kind of report is being written
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum ReportCategory {
    /// Gang report (default)
    #[default]
    Gang,
    /// Family report
    Family,
}

impl ReportCategory {
    /// Both categories, in the order the form offers them
    pub const ALL: [ReportCategory; 2] = [Self::Gang, Self::Family];

    /// Parse a category from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gang" | "g" => Some(Self::Gang),
            "family" | "f" => Some(Self::Family),
            _ => None,
        }
    }

    /// The evidence fields of this category, in render order
    pub fn schema(&self) -> &'static [EvidenceField] {
        match self {
            Self::Gang => GANG_SCHEMA,
            Self::Family => FAMILY_SCHEMA,
        }
    }

    /// Prefix used by the string form of this category's evidence keys
    pub fn key_prefix(&self) -> &'static str {
        match self {
            Self::Gang => "gang",
            Self::Family => "family",
        }
    }

    /// Heading line of the crimes section.
    ///
    /// The Family heading keeps a space before the colon; downstream tooling
    /// matches on it.
    pub fn crimes_heading(&self) -> &'static str {
        match self {
            Self::Gang => "Crimes Committed (Mandatory):",
            Self::Family => "Crimes Committed :",
        }
    }

    /// The other category
    pub fn toggled(&self) -> Self {
        match self {
            Self::Gang => Self::Family,
            Self::Family => Self::Gang,
        }
    }
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gang => write!(f, "Gang"),
            Self::Family => write!(f, "Family"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ReportCategory::parse("gang"), Some(ReportCategory::Gang));
        assert_eq!(ReportCategory::parse(" Family "), Some(ReportCategory::Family));
        assert_eq!(ReportCategory::parse("f"), Some(ReportCategory::Family));
        assert_eq!(ReportCategory::parse("mafia"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ReportCategory::Gang.to_string(), "Gang");
        assert_eq!(ReportCategory::Family.to_string(), "Family");
    }

    #[test]
    fn test_crimes_heading() {
        assert_eq!(
            ReportCategory::Gang.crimes_heading(),
            "Crimes Committed (Mandatory):"
        );
        assert_eq!(ReportCategory::Family.crimes_heading(), "Crimes Committed :");
    }

    #[test]
    fn test_schema_sizes() {
        assert_eq!(ReportCategory::Gang.schema().len(), 5);
        assert_eq!(ReportCategory::Family.schema().len(), 7);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(ReportCategory::Gang.toggled(), ReportCategory::Family);
        assert_eq!(ReportCategory::Family.toggled(), ReportCategory::Gang);
    }
}
