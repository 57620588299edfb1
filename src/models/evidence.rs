//! Evidence field model
//!
//! Each report category has a fixed, ordered list of evidence slots. A slot is
//! addressed by an [`EvidenceKey`], which pairs a category with one of its own
//! fields, so a key can never name a field the category does not have.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ReportCategory;

/// A named evidence slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EvidenceField {
    /// Proof that the bodycam was refreshed and uploaded
    BodycamProof,
    /// Bodycam footage of the incident
    BodycamFootage,
    /// Bodycam footage of the interrogation
    InterrogationFootage,
    /// Proof of the culprit's identity
    CulpritIdentification,
    /// Vehicle license plates
    LicensePlates,
    /// License plates looked up in the PDA
    PdaPlateSearch,
    /// Registered car owner looked up in the PDA
    PdaOwnerSearch,
}

/// Gang evidence fields, in render order
pub const GANG_SCHEMA: &[EvidenceField] = &[
    EvidenceField::BodycamProof,
    EvidenceField::BodycamFootage,
    EvidenceField::InterrogationFootage,
    EvidenceField::CulpritIdentification,
    EvidenceField::LicensePlates,
];

/// Family evidence fields, in render order
pub const FAMILY_SCHEMA: &[EvidenceField] = &[
    EvidenceField::BodycamProof,
    EvidenceField::BodycamFootage,
    EvidenceField::CulpritIdentification,
    EvidenceField::InterrogationFootage,
    EvidenceField::LicensePlates,
    EvidenceField::PdaPlateSearch,
    EvidenceField::PdaOwnerSearch,
];

impl EvidenceField {
    /// Label exactly as it appears in the rendered report
    pub fn label(&self) -> &'static str {
        match self {
            Self::BodycamProof => "Proof of bodycam / refresh / upload:",
            Self::BodycamFootage => "Bodycam Footage:",
            Self::InterrogationFootage => "Bodycam Footage of interrogation:",
            Self::CulpritIdentification => "Culprit Identification Proof:",
            Self::LicensePlates => "License plates:",
            Self::PdaPlateSearch => "License plates searched in PDA:",
            Self::PdaOwnerSearch => "Owner of the car searched in PDA:",
        }
    }

    /// Suffix of the string key (`gang_<suffix>`, `family_<suffix>`)
    pub fn key_suffix(&self) -> &'static str {
        match self {
            Self::BodycamProof => "proof",
            Self::BodycamFootage => "footage",
            Self::InterrogationFootage => "interrogation",
            Self::CulpritIdentification => "id",
            Self::LicensePlates => "plates",
            Self::PdaPlateSearch => "pda",
            Self::PdaOwnerSearch => "owner",
        }
    }

    fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "proof" => Some(Self::BodycamProof),
            "footage" => Some(Self::BodycamFootage),
            "interrogation" => Some(Self::InterrogationFootage),
            "id" => Some(Self::CulpritIdentification),
            "plates" => Some(Self::LicensePlates),
            "pda" => Some(Self::PdaPlateSearch),
            "owner" => Some(Self::PdaOwnerSearch),
            _ => None,
        }
    }
}

/// Address of one evidence slot: a category and a field from its schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct EvidenceKey {
    category: ReportCategory,
    field: EvidenceField,
}

impl EvidenceKey {
    /// Build a key, or `None` if the field is not part of the category's schema
    pub fn new(category: ReportCategory, field: EvidenceField) -> Option<Self> {
        if category.schema().contains(&field) {
            Some(Self { category, field })
        } else {
            None
        }
    }

    /// Parse a string key such as `gang_proof` or `family_owner`
    pub fn parse(s: &str) -> Option<Self> {
        let (prefix, suffix) = s.trim().split_once('_')?;
        let category = ReportCategory::ALL
            .into_iter()
            .find(|c| c.key_prefix() == prefix)?;
        let field = EvidenceField::from_suffix(suffix)?;
        Self::new(category, field)
    }

    /// All keys of a category, in render order
    pub fn for_category(category: ReportCategory) -> impl Iterator<Item = EvidenceKey> {
        category
            .schema()
            .iter()
            .map(move |&field| EvidenceKey { category, field })
    }

    /// The category this key belongs to
    pub fn category(&self) -> ReportCategory {
        self.category
    }

    /// The evidence field
    pub fn field(&self) -> EvidenceField {
        self.field
    }

    /// Rendered label of the field
    pub fn label(&self) -> &'static str {
        self.field.label()
    }
}

impl fmt::Display for EvidenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.category.key_prefix(), self.field.key_suffix())
    }
}

impl From<EvidenceKey> for String {
    fn from(key: EvidenceKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for EvidenceKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown evidence key: {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gang_keys_in_order() {
        let keys: Vec<String> = EvidenceKey::for_category(ReportCategory::Gang)
            .map(|k| k.to_string())
            .collect();
        assert_eq!(
            keys,
            vec![
                "gang_proof",
                "gang_footage",
                "gang_interrogation",
                "gang_id",
                "gang_plates"
            ]
        );
    }

    #[test]
    fn test_family_order_differs_from_gang() {
        let labels: Vec<&str> = EvidenceKey::for_category(ReportCategory::Family)
            .map(|k| k.label())
            .collect();
        assert_eq!(labels[2], "Culprit Identification Proof:");
        assert_eq!(labels[3], "Bodycam Footage of interrogation:");
        assert_eq!(labels[6], "Owner of the car searched in PDA:");
    }

    #[test]
    fn test_key_rejects_field_outside_schema() {
        assert!(EvidenceKey::new(ReportCategory::Gang, EvidenceField::PdaOwnerSearch).is_none());
        assert!(EvidenceKey::parse("gang_pda").is_none());
        assert!(EvidenceKey::new(ReportCategory::Family, EvidenceField::PdaOwnerSearch).is_some());
    }

    #[test]
    fn test_parse_round_trips_display() {
        for category in ReportCategory::ALL {
            for key in EvidenceKey::for_category(category) {
                assert_eq!(EvidenceKey::parse(&key.to_string()), Some(key));
            }
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert!(EvidenceKey::parse("proof").is_none());
        assert!(EvidenceKey::parse("police_proof").is_none());
        assert!(EvidenceKey::parse("gang_photos").is_none());
    }

    #[test]
    fn test_serde_uses_string_key() {
        let key = EvidenceKey::parse("family_owner").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"family_owner\"");
        let back: EvidenceKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<EvidenceKey>("\"gang_owner\"").is_err());
    }
}
