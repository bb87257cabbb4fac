//! List editors for the contracts and planning tabs.
//!
//! Editors own only view state (search term, selection, sort). Mutations
//! take the current list and return the new one; the caller hands it to
//! `AppState`, which keeps the canonical copy and persists it.

use crate::app::controllers::table::{TableEvent, TableModel, TableView};
use crate::app::domain::columns::{all_columns, visible_columns};
use crate::app::domain::{ColumnConfig, ColumnView, Contract, ContractField, PlanningField, PlanningItem, Record};
use crate::app::services::export::export_csv;
use crate::app::services::ids::generate_id;
use crate::app::services::search::matches_search;

pub struct CollectionEditor<T: Record> {
    search: String,
    selected: Option<String>,
    table: TableView<T::Field>,
}

impl<T: Record> Default for CollectionEditor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> CollectionEditor<T> {
    pub fn new() -> Self {
        Self {
            search: String::new(),
            selected: None,
            table: TableView::new(),
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn select(&mut self, id: Option<String>) {
        self.selected = id;
    }

    /// Records of `records` matching the search term, in list order.
    pub fn filtered<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        records
            .iter()
            .filter(|record| matches_search(*record, &self.search))
            .collect()
    }

    pub fn selected_record<'a>(&self, records: &'a [T]) -> Option<&'a T> {
        let id = self.selected.as_deref()?;
        records.iter().find(|record| record.id() == id)
    }

    /// Table frame for already filtered `rows`.
    pub fn model(&self, columns: &[ColumnView<T::Field>], rows: &[&T]) -> TableModel {
        self.table.model(columns, rows, self.selected.as_deref())
    }

    /// Apply the table events that only touch view state (sorting and row
    /// selection). Returns false for events the caller has to handle.
    pub fn apply_view_event(&mut self, event: &TableEvent) -> bool {
        match event {
            TableEvent::SortRequested(key) => {
                self.table.request_sort_key(key);
                true
            }
            TableEvent::RowSelected(id) => {
                self.selected = Some(id.clone());
                true
            }
            _ => false,
        }
    }

    /// Append `record` under a fresh id. Returns the new list and the id.
    pub fn create(&self, records: &[T], mut record: T) -> (Vec<T>, String) {
        let id = generate_id(|candidate| records.iter().any(|r| r.id() == candidate));
        record.set_id(id.clone());
        tracing::debug!(id = %id, "Record created");

        let mut updated = records.to_vec();
        updated.push(record);
        (updated, id)
    }

    /// Replace the record with the same id, keeping its position.
    pub fn update(&self, records: &[T], record: T) -> Vec<T> {
        records
            .iter()
            .map(|existing| {
                if existing.id() == record.id() {
                    record.clone()
                } else {
                    existing.clone()
                }
            })
            .collect()
    }

    /// Create when `record` has no id yet, update otherwise.
    pub fn save(&self, records: &[T], record: T) -> Vec<T> {
        if record.id().is_empty() {
            self.create(records, record).0
        } else {
            self.update(records, record)
        }
    }

    /// Remove the record with `id` once `confirm` agrees. `None` when the
    /// user declined; the list is then left as it was.
    pub fn delete(&mut self, records: &[T], id: &str, confirm: impl FnOnce() -> bool) -> Option<Vec<T>> {
        if !confirm() {
            return None;
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        tracing::debug!(id, "Record deleted");
        Some(records.iter().filter(|r| r.id() != id).cloned().collect())
    }
}

/// Planning tab editor. Its columns are fixed.
pub type PlanningEditor = CollectionEditor<PlanningItem>;

pub fn planning_columns() -> Vec<ColumnView<PlanningField>> {
    visible_columns(&all_columns::<PlanningField>())
}

/// Filtered count and cost shown above the contracts table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContractsSummary {
    pub count: usize,
    pub total_cost: f64,
}

/// Contracts tab editor: the generic editor plus a year filter, the cost
/// summary and CSV export.
#[derive(Default)]
pub struct ContractsEditor {
    collection: CollectionEditor<Contract>,
    year_filter: Option<i32>,
}

impl ContractsEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection(&self) -> &CollectionEditor<Contract> {
        &self.collection
    }

    pub fn collection_mut(&mut self) -> &mut CollectionEditor<Contract> {
        &mut self.collection
    }

    pub fn year_filter(&self) -> Option<i32> {
        self.year_filter
    }

    pub fn set_year_filter(&mut self, year: Option<i32>) {
        self.year_filter = year;
    }

    /// Contracts passing both the search term and the year filter.
    pub fn filtered<'a>(&self, contracts: &'a [Contract]) -> Vec<&'a Contract> {
        self.collection
            .filtered(contracts)
            .into_iter()
            .filter(|c| self.year_filter.is_none_or(|year| c.year == year))
            .collect()
    }

    pub fn summary(&self, contracts: &[Contract]) -> ContractsSummary {
        let filtered = self.filtered(contracts);
        ContractsSummary {
            count: filtered.len(),
            total_cost: filtered.iter().map(|c| c.expected_cost).sum(),
        }
    }

    /// Distinct years over the whole list, newest first.
    pub fn available_years(&self, contracts: &[Contract]) -> Vec<i32> {
        let mut years: Vec<i32> = contracts.iter().map(|c| c.year).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();
        years
    }

    pub fn model(&self, contracts: &[Contract], columns: &[ColumnConfig]) -> TableModel {
        let columns = visible_columns::<ContractField>(columns);
        self.collection.model(&columns, &self.filtered(contracts))
    }

    /// CSV of the filtered view over the visible columns. Rows keep list
    /// order; the table sort does not apply.
    pub fn export(&self, contracts: &[Contract], columns: &[ColumnConfig]) -> String {
        let columns = visible_columns::<ContractField>(columns);
        export_csv(&self.filtered(contracts), &columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::columns::default_contract_columns;

    fn contract(id: &str, item: &str, year: i32, cost: f64) -> Contract {
        Contract {
            id: id.to_string(),
            item: item.to_string(),
            year,
            expected_cost: cost,
            ..Default::default()
        }
    }

    fn sample() -> Vec<Contract> {
        vec![
            contract("a", "Папір", 2023, 100.0),
            contract("b", "Бензин", 2024, 50.0),
            contract("c", "Папір кольоровий", 2024, 75.0),
        ]
    }

    fn ids(records: &[Contract]) -> Vec<&str> {
        records.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_create_appends_with_fresh_id() {
        let editor = CollectionEditor::<Contract>::new();
        let records = sample();
        let (updated, id) = editor.create(&records, Contract::draft(2025));
        assert_eq!(updated.len(), 4);
        assert_eq!(updated[3].id, id);
        assert!(!id.is_empty());
        assert!(records.iter().all(|c| c.id != id));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let editor = CollectionEditor::<Contract>::new();
        let mut changed = contract("b", "Дизпаливо", 2024, 55.0);
        changed.du = true;
        let updated = editor.update(&sample(), changed.clone());
        assert_eq!(ids(&updated), vec!["a", "b", "c"]);
        assert_eq!(updated[1], changed);
    }

    #[test]
    fn test_save_dispatches_on_id() {
        let editor = CollectionEditor::<Contract>::new();
        let records = sample();
        assert_eq!(editor.save(&records, Contract::draft(2024)).len(), 4);
        let updated = editor.save(&records, contract("a", "Нове", 2023, 1.0));
        assert_eq!(updated.len(), 3);
        assert_eq!(updated[0].item, "Нове");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut editor = CollectionEditor::<Contract>::new();
        let records = sample();
        editor.select(Some("b".to_string()));

        assert!(editor.delete(&records, "b", || false).is_none());
        assert_eq!(editor.selected.as_deref(), Some("b"));

        let updated = editor.delete(&records, "b", || true).unwrap();
        assert_eq!(ids(&updated), vec!["a", "c"]);
        assert_eq!(editor.selected.as_deref(), None);
    }

    #[test]
    fn test_delete_keeps_unrelated_selection() {
        let mut editor = CollectionEditor::<Contract>::new();
        editor.select(Some("a".to_string()));
        let updated = editor.delete(&sample(), "c", || true).unwrap();
        assert_eq!(ids(&updated), vec!["a", "b"]);
        assert_eq!(editor.selected.as_deref(), Some("a"));
    }

    #[test]
    fn test_search_and_year_filter_combine() {
        let records = sample();
        let mut editor = ContractsEditor::new();
        editor.collection_mut().set_search("папір");
        assert_eq!(editor.filtered(&records).len(), 2);

        editor.set_year_filter(Some(2024));
        let filtered = editor.filtered(&records);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "c");

        editor.collection_mut().set_search("");
        assert_eq!(editor.filtered(&records).len(), 2);
    }

    #[test]
    fn test_summary_over_filtered_set() {
        let records = sample();
        let mut editor = ContractsEditor::new();
        assert_eq!(
            editor.summary(&records),
            ContractsSummary {
                count: 3,
                total_cost: 225.0
            }
        );
        editor.set_year_filter(Some(2024));
        assert_eq!(editor.summary(&records).total_cost, 125.0);
        editor.set_year_filter(Some(1999));
        assert_eq!(editor.summary(&records).count, 0);
    }

    #[test]
    fn test_available_years_descending_and_distinct() {
        let editor = ContractsEditor::new();
        assert_eq!(editor.available_years(&sample()), vec![2024, 2023]);
        assert!(editor.available_years(&[]).is_empty());
    }

    #[test]
    fn test_view_events_sort_and_select() {
        let records = sample();
        let mut editor = ContractsEditor::new();
        assert!(
            editor
                .collection_mut()
                .apply_view_event(&TableEvent::SortRequested("expected_cost"))
        );
        assert!(
            editor
                .collection_mut()
                .apply_view_event(&TableEvent::RowSelected("c".to_string()))
        );
        assert!(
            !editor
                .collection_mut()
                .apply_view_event(&TableEvent::EditRequested("c".to_string()))
        );

        let model = editor.model(&records, &default_contract_columns());
        let order: Vec<&str> = (0..model.row_count())
            .filter_map(|i| model.row(i))
            .map(|row| row.id.as_str())
            .collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert!(model.row(1).unwrap().selected);
        assert_eq!(
            editor.collection().selected_record(&records).map(|c| c.item.as_str()),
            Some("Папір кольоровий")
        );
    }

    #[test]
    fn test_export_uses_filtered_view() {
        let records = sample();
        let mut editor = ContractsEditor::new();
        editor.set_year_filter(Some(2023));
        let columns = vec![
            ColumnConfig::new(ContractField::Item, true, None),
            ColumnConfig::new(ContractField::Year, true, None),
            ColumnConfig::new(ContractField::Kekv, false, None),
        ];
        assert_eq!(
            editor.export(&records, &columns),
            "Предмет закупівлі,Рік\n\"Папір\",2023"
        );
    }

    #[test]
    fn test_planning_editor() {
        let mut editor = PlanningEditor::new();
        let items = vec![
            PlanningItem {
                id: "p1".to_string(),
                name: "Електроенергія".to_string(),
                ..Default::default()
            },
            PlanningItem {
                id: "p2".to_string(),
                name: "Вода".to_string(),
                ..Default::default()
            },
        ];
        editor.set_search("вод");
        assert_eq!(editor.filtered(&items).len(), 1);

        let columns = planning_columns();
        assert_eq!(columns.len(), 8);
        let model = editor.model(&columns, &editor.filtered(&items));
        assert_eq!(model.row(0).unwrap().id, "p2");

        let (updated, id) = editor.create(&items, PlanningItem::default());
        assert_eq!(updated.last().unwrap().id, id);
    }
}
