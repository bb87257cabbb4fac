use serde::{Deserialize, Serialize};

use super::contract::ContractField;
use super::record::FieldSpec;

/// Width used when a column has none stored
pub const DEFAULT_COLUMN_WIDTH: u32 = 150;

/// Persisted description of one projectable field.
///
/// The key is kept as a string so that settings written by other versions
/// (renamed or removed fields) still load; unknown keys are skipped when the
/// columns are resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub key: String,
    pub label: String,
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl ColumnConfig {
    pub fn new<F: FieldSpec>(field: F, visible: bool, width: Option<u32>) -> Self {
        Self {
            key: field.key().to_string(),
            label: field.label().to_string(),
            visible,
            width,
        }
    }
}

/// A visible column resolved against a typed field set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView<F> {
    pub field: F,
    pub label: String,
    pub width: u32,
}

/// Default contract column table: order, visibility and width.
pub fn default_contract_columns() -> Vec<ColumnConfig> {
    use ContractField::*;

    const DEFAULTS: [(ContractField, bool, u32); 19] = [
        (Item, true, 300),
        (DkCode, true, 120),
        (Quantity, true, 60),
        (Unit, true, 100),
        (ExpectedCost, true, 120),
        (ContractNumber, true, 120),
        (ContractDate, true, 120),
        (Year, true, 70),
        (ContractingParty, true, 250),
        (Du, true, 50),
        (Reporting, true, 50),
        (ProcurementType, true, 120),
        (ProzorroLink, true, 80),
        (ContractFileName, true, 80),
        // Hidden by default
        (Kekv, false, 100),
        (LegalDate, false, 120),
        (FinancialDate, false, 120),
        (AnnouncedWinner, false, 120),
        (ContractFilePath, false, 200),
    ];

    DEFAULTS
        .iter()
        .map(|(field, visible, width)| ColumnConfig::new(*field, *visible, Some(*width)))
        .collect()
}

/// Every field of `F`, visible, without a stored width.
pub fn all_columns<F: FieldSpec>() -> Vec<ColumnConfig> {
    F::ALL
        .iter()
        .map(|field| ColumnConfig::new(*field, true, None))
        .collect()
}

/// Resolve persisted column settings into the visible columns of `F`.
///
/// Keeps persisted order, drops hidden and unknown keys, and keeps only the
/// first entry when a key appears twice.
pub fn visible_columns<F: FieldSpec>(configs: &[ColumnConfig]) -> Vec<ColumnView<F>> {
    let mut seen: Vec<F> = Vec::new();
    let mut columns = Vec::new();

    for config in configs {
        let Some(field) = F::from_key(&config.key) else {
            continue;
        };
        if seen.contains(&field) {
            continue;
        }
        seen.push(field);

        if config.visible {
            columns.push(ColumnView {
                field,
                label: config.label.clone(),
                width: config.width.unwrap_or(DEFAULT_COLUMN_WIDTH),
            });
        }
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::planning::PlanningField;

    #[test]
    fn test_default_contract_columns_cover_every_field_once() {
        let columns = default_contract_columns();
        assert_eq!(columns.len(), ContractField::ALL.len());
        for field in ContractField::ALL {
            assert_eq!(columns.iter().filter(|c| c.key == field.key()).count(), 1);
        }
        assert_eq!(columns[0].key, "item");
        assert_eq!(columns[0].width, Some(300));
    }

    #[test]
    fn test_visible_columns_filters_hidden() {
        let visible = visible_columns::<ContractField>(&default_contract_columns());
        assert_eq!(visible.len(), 14);
        assert!(visible.iter().all(|c| c.field != ContractField::Kekv));
        assert_eq!(visible[4].field, ContractField::ExpectedCost);
    }

    #[test]
    fn test_unknown_and_duplicate_keys_are_never_displayed() {
        let configs = vec![
            ColumnConfig {
                key: "legacy_column".to_string(),
                label: "Old".to_string(),
                visible: true,
                width: Some(90),
            },
            ColumnConfig::new(ContractField::Year, true, Some(70)),
            ColumnConfig {
                key: "year".to_string(),
                label: "Year again".to_string(),
                visible: true,
                width: Some(500),
            },
        ];
        let visible = visible_columns::<ContractField>(&configs);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].field, ContractField::Year);
        assert_eq!(visible[0].width, 70);
    }

    #[test]
    fn test_missing_width_uses_default() {
        let visible = visible_columns::<PlanningField>(&all_columns::<PlanningField>());
        assert_eq!(visible.len(), PlanningField::ALL.len());
        assert!(visible.iter().all(|c| c.width == DEFAULT_COLUMN_WIDTH));
    }

    #[test]
    fn test_width_is_omitted_when_absent() {
        let config = ColumnConfig::new(PlanningField::Notes, true, None);
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("width"));
    }
}
