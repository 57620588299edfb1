//! Catalog display formatting
//!
//! Formats the charge catalog and the evidence schemas for terminal output.

use crate::models::{ChargeSelection, ChargeTier, EvidenceKey, ReportCategory};

/// Format the charge catalog as a tree grouped by tier.
///
/// When a selection is given, selected charges are marked with `[x]`.
pub fn format_charge_catalog(selection: Option<&ChargeSelection>) -> String {
    let tiers = [ChargeTier::Top, ChargeTier::General];
    let mut output = String::new();

    for (i, tier) in tiers.iter().enumerate() {
        let charges = tier.charges();
        output.push_str(&format!("{} ({})\n", tier, charges.len()));

        for (j, charge) in charges.iter().enumerate() {
            let prefix = if j == charges.len() - 1 {
                "└── "
            } else {
                "├── "
            };
            let mark = match selection {
                Some(s) if s.contains(charge) => "[x] ",
                Some(_) => "[ ] ",
                None => "",
            };
            output.push_str(&format!("  {}{}{}\n", prefix, mark, charge));
        }

        if i < tiers.len() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Format the evidence fields of one category, or of both when `None`
pub fn format_evidence_fields(category: Option<ReportCategory>) -> String {
    let categories: Vec<ReportCategory> = match category {
        Some(c) => vec![c],
        None => ReportCategory::ALL.to_vec(),
    };

    let key_width = categories
        .iter()
        .flat_map(|c| EvidenceKey::for_category(*c))
        .map(|k| k.to_string().len())
        .max()
        .unwrap_or(3)
        .max(3);

    let mut output = String::new();
    for (i, category) in categories.iter().enumerate() {
        output.push_str(&format!("{} evidence:\n", category));
        output.push_str(&format!("  {:<width$}  {}\n", "Key", "Label", width = key_width));
        output.push_str(&format!("  {}\n", "-".repeat(key_width + 40)));

        for key in EvidenceKey::for_category(*category) {
            output.push_str(&format!(
                "  {:<width$}  {}\n",
                key.to_string(),
                key.label(),
                width = key_width
            ));
        }

        if i < categories.len() - 1 {
            output.push('\n');
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_charge_catalog() {
        let output = format_charge_catalog(None);
        assert!(output.starts_with("Top Charges (6)\n"));
        assert!(output.contains("All Charges (14)\n"));
        assert!(output.contains("  ├── PC 3.1.6 Banditry\n"));
        assert!(output.contains("  └── PC 3.11 Murder or Attempted murder of a public servant\n"));
        assert!(!output.contains("[ ]"));
    }

    #[test]
    fn test_format_charge_catalog_marks_selection() {
        let selection = ChargeSelection::from_codes(["PC 2.8.2 Kidnapping"]);
        let output = format_charge_catalog(Some(&selection));
        assert!(output.contains("[x] PC 2.8.2 Kidnapping"));
        assert!(output.contains("[ ] PC 2.8.1 Abduction"));
    }

    #[test]
    fn test_format_evidence_fields() {
        let output = format_evidence_fields(Some(ReportCategory::Family));
        assert!(output.starts_with("Family evidence:"));
        assert!(output.contains("family_owner"));
        assert!(output.contains("Owner of the car searched in PDA:"));
        assert!(!output.contains("gang_"));

        let both = format_evidence_fields(None);
        assert!(both.contains("Gang evidence:"));
        assert!(both.contains("gang_interrogation"));
        assert!(both.contains("family_pda"));
    }
}
