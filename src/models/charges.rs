//! Charge catalog and charge selection
//!
//! The catalog is fixed: a short list of top (severe) charges followed by the
//! general list. Selections are stored as a set, but anything that displays
//! them walks the catalog so output order never depends on click order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Severe charges, shown first
pub const TOP_CHARGES: &[&str] = &[
    "PC 3.1.6 Banditry",
    "PC 2.10.6 Robbery",
    "PC 2.8.3 Taking a hostage",
    "PC 2.5.6 Brandishing of a weapon",
    "PC 3.4.2 Trespassing in a State Facility",
    "PC 3.11 Murder or Attempted murder of a public servant",
];

/// General charges
pub const ALL_CHARGES: &[&str] = &[
    "PC 2.2.4 Cultivation of cannabis (small quantities)",
    "PC 2.2.5 Cultivation of cannabis (large quantities)",
    "PC 2.5.3 Open Carrying",
    "PC 2.5.8 Discharging a weapon in a public place",
    "PC 2.8.1 Abduction",
    "PC 2.8.2 Kidnapping",
    "PC 2.8.4 Human Trafficking",
    "PC 2.13.3 Vandalism",
    "PC 3.1.1 Participation in terrorism",
    "PC 3.1.4 Committing a terrorist act",
    "PC 3.1.5 Creation of a stable armed group",
    "PC 3.8.2 Impersonating a law enforcement officer",
    "PC 3.10 Battery of a public servant",
    "PC 3.20 Participation in a cyber attack of the state's resources",
];

/// Which list of the catalog a charge comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChargeTier {
    /// Severe charges
    #[default]
    Top,
    /// Everything else
    General,
}

impl ChargeTier {
    /// The charges of this tier, in catalog order
    pub fn charges(&self) -> &'static [&'static str] {
        match self {
            Self::Top => TOP_CHARGES,
            Self::General => ALL_CHARGES,
        }
    }

    /// The other tier
    pub fn toggled(&self) -> Self {
        match self {
            Self::Top => Self::General,
            Self::General => Self::Top,
        }
    }
}

impl fmt::Display for ChargeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "Top Charges"),
            Self::General => write!(f, "All Charges"),
        }
    }
}

/// Read-only view over the two charge lists
pub struct ChargeCatalog;

impl ChargeCatalog {
    /// Every charge in catalog order: top charges first, then the general list
    pub fn iter() -> impl Iterator<Item = &'static str> {
        TOP_CHARGES.iter().chain(ALL_CHARGES.iter()).copied()
    }

    /// Number of charges in the catalog
    pub fn len() -> usize {
        TOP_CHARGES.len() + ALL_CHARGES.len()
    }

    /// Look up a charge, returning the catalog's own static string
    pub fn lookup(code: &str) -> Option<&'static str> {
        Self::iter().find(|c| *c == code)
    }

    /// Whether a code is a catalog entry
    pub fn contains(code: &str) -> bool {
        Self::lookup(code).is_some()
    }

    /// Position of a charge in catalog order
    pub fn position(code: &str) -> Option<usize> {
        Self::iter().position(|c| c == code)
    }

    /// Tier a charge belongs to
    pub fn tier_of(code: &str) -> Option<ChargeTier> {
        if TOP_CHARGES.contains(&code) {
            Some(ChargeTier::Top)
        } else if ALL_CHARGES.contains(&code) {
            Some(ChargeTier::General)
        } else {
            None
        }
    }
}

/// The set of charges picked for a report.
///
/// Only catalog entries can be inserted; anything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ChargeSelection {
    selected: BTreeSet<&'static str>,
}

impl ChargeSelection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from arbitrary codes, keeping only catalog entries
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected = codes
            .into_iter()
            .filter_map(|c| ChargeCatalog::lookup(c.as_ref()))
            .collect();
        Self { selected }
    }

    /// Flip one charge. Returns whether the charge is selected afterwards.
    pub fn toggle(&mut self, code: &str) -> bool {
        let Some(code) = ChargeCatalog::lookup(code) else {
            return false;
        };
        if !self.selected.remove(code) {
            self.selected.insert(code);
            true
        } else {
            false
        }
    }

    /// Whether a charge is selected
    pub fn contains(&self, code: &str) -> bool {
        self.selected.contains(code)
    }

    /// Select every charge of a tier
    pub fn select_tier(&mut self, tier: ChargeTier) {
        self.selected.extend(tier.charges().iter().copied());
    }

    /// Select the whole catalog
    pub fn select_all(&mut self) {
        self.select_tier(ChargeTier::Top);
        self.select_tier(ChargeTier::General);
    }

    /// Drop every selection
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Number of selected charges
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected charges in catalog order
    pub fn ordered(&self) -> Vec<&'static str> {
        ChargeCatalog::iter()
            .filter(|c| self.selected.contains(c))
            .collect()
    }
}

impl From<Vec<String>> for ChargeSelection {
    fn from(codes: Vec<String>) -> Self {
        Self::from_codes(codes)
    }
}

impl From<ChargeSelection> for Vec<String> {
    fn from(selection: ChargeSelection) -> Self {
        selection.ordered().into_iter().map(String::from).collect()
    }
}
