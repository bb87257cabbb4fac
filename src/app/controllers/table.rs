//! Toolkit-independent table engine.
//!
//! `TableView` keeps the only state a table owns, the active sort, and turns
//! rows plus resolved columns into a `TableModel` the widget paints. Column
//! drags are tracked by the widget through `ResizeDrag`. It never mutates caller data; user
//! interaction is reported as `TableEvent`s.

use crate::app::domain::{ColumnView, FieldRole, FieldSpec, FieldValue, Record};
use crate::app::services::format::{format_currency, format_day_month};

/// Text of the single row shown when there is nothing to display
pub const EMPTY_PLACEHOLDER: &str = "Немає даних для відображення";

/// Cell text for an empty link or file reference
pub const MISSING_VALUE: &str = "-";

/// Columns narrower than this are never reported
pub const MIN_COLUMN_WIDTH: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    pub field: F,
    pub direction: SortDirection,
}

/// Interaction reported by a table widget. Columns are identified by their
/// field key, rows by record id.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    SortRequested(&'static str),
    ColumnResized { column: &'static str, width: u32 },
    RowSelected(String),
    EditRequested(String),
    DeleteRequested(String),
    OpenLink(String),
    OpenFile(String),
}

/// Width for a drag that started at `start_x` on a column `start_width`
/// wide and is now at `current_x`. `None` while the result would not be
/// wider than `MIN_COLUMN_WIDTH`.
pub fn resize_width(start_width: u32, start_x: i32, current_x: i32) -> Option<u32> {
    let width = start_width as f64 + f64::from(current_x - start_x);
    if width > f64::from(MIN_COLUMN_WIDTH) {
        Some(width.round() as u32)
    } else {
        None
    }
}

/// Column drag in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeDrag {
    pub column: &'static str,
    pub start_x: i32,
    pub start_width: u32,
}

impl ResizeDrag {
    pub fn new(column: &'static str, start_x: i32, start_width: u32) -> Self {
        Self {
            column,
            start_x,
            start_width,
        }
    }

    pub fn event_at(&self, current_x: i32) -> Option<TableEvent> {
        resize_width(self.start_width, self.start_x, current_x).map(|width| {
            TableEvent::ColumnResized {
                column: self.column,
                width,
            }
        })
    }
}

/// What a single body cell shows
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Check(bool),
    Link(String),
    File(String),
    /// Empty link or file reference
    Missing,
    Text(String),
}

impl CellContent {
    /// Text drawn for the cell; check marks and affordances are painted
    /// by the widget.
    pub fn display_text(&self) -> &str {
        match self {
            CellContent::Text(text) => text,
            CellContent::Missing => MISSING_VALUE,
            CellContent::Check(_) | CellContent::Link(_) | CellContent::File(_) => "",
        }
    }
}

/// Project one field of `record` into a cell according to the field's role.
pub fn project_cell<T: Record>(record: &T, field: T::Field) -> CellContent {
    let value = record.value(field);
    match field.role() {
        FieldRole::Flag => CellContent::Check(matches!(value, FieldValue::Flag(true))),
        FieldRole::ExternalLink if value.is_empty() => CellContent::Missing,
        FieldRole::ExternalLink => CellContent::Link(value.to_plain_string()),
        FieldRole::FileReference if value.is_empty() => CellContent::Missing,
        FieldRole::FileReference => CellContent::File(value.to_plain_string()),
        FieldRole::Currency => match value {
            FieldValue::Number(amount) => CellContent::Text(format_currency(amount)),
            other => CellContent::Text(other.to_plain_string()),
        },
        FieldRole::Date => match value {
            FieldValue::Text(raw) if !raw.is_empty() => CellContent::Text(format_day_month(raw)),
            other => CellContent::Text(other.to_plain_string()),
        },
        FieldRole::Plain => CellContent::Text(value.to_plain_string()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: &'static str,
    pub label: String,
    pub width: u32,
    pub sort: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowModel {
    pub id: String,
    /// 1-based position in the rendered order
    pub number: usize,
    pub selected: bool,
    pub cells: Vec<CellContent>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<RowModel>),
    /// One full-width row with this text
    Placeholder(&'static str),
}

/// Everything a table widget needs to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
}

impl Default for TableModel {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            body: TableBody::Placeholder(EMPTY_PLACEHOLDER),
        }
    }
}

impl TableModel {
    /// Rows the widget has to lay out, the placeholder included.
    pub fn row_count(&self) -> usize {
        match &self.body {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Placeholder(_) => 1,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, TableBody::Placeholder(_))
    }

    pub fn row(&self, index: usize) -> Option<&RowModel> {
        match &self.body {
            TableBody::Rows(rows) => rows.get(index),
            TableBody::Placeholder(_) => None,
        }
    }
}

/// Sort and projection state for one table.
#[derive(Debug, Clone)]
pub struct TableView<F> {
    sort: Option<SortState<F>>,
}

impl<F: FieldSpec> Default for TableView<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FieldSpec> TableView<F> {
    pub fn new() -> Self {
        Self { sort: None }
    }

    pub fn sort(&self) -> Option<SortState<F>> {
        self.sort
    }

    /// Header click on `field`: the same field while ascending flips to
    /// descending; anything else sorts ascending.
    pub fn request_sort(&mut self, field: F) {
        let direction = match self.sort {
            Some(state) if state.field == field && state.direction == SortDirection::Ascending => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.sort = Some(SortState { field, direction });
    }

    /// `request_sort` by persisted field key. Returns false for unknown keys.
    pub fn request_sort_key(&mut self, key: &str) -> bool {
        match F::from_key(key) {
            Some(field) => {
                self.request_sort(field);
                true
            }
            None => false,
        }
    }

    /// `rows` in display order. Ties keep their input order.
    pub fn sorted<'a, T>(&self, rows: &[&'a T]) -> Vec<&'a T>
    where
        T: Record<Field = F>,
    {
        let mut sorted = rows.to_vec();
        if let Some(state) = self.sort {
            sorted.sort_by(|a, b| {
                let ordering = a.value(state.field).compare(&b.value(state.field));
                match state.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
        sorted
    }

    /// Build the frame for `rows` under `columns`, marking `selected`.
    pub fn model<T>(&self, columns: &[ColumnView<F>], rows: &[&T], selected: Option<&str>) -> TableModel
    where
        T: Record<Field = F>,
    {
        let headers = columns
            .iter()
            .map(|column| HeaderCell {
                key: column.field.key(),
                label: column.label.clone(),
                width: column.width,
                sort: self
                    .sort
                    .filter(|state| state.field == column.field)
                    .map(|state| state.direction),
            })
            .collect();

        if rows.is_empty() {
            return TableModel {
                headers,
                body: TableBody::Placeholder(EMPTY_PLACEHOLDER),
            };
        }

        let rows = self
            .sorted(rows)
            .into_iter()
            .enumerate()
            .map(|(index, record)| RowModel {
                id: record.id().to_string(),
                number: index + 1,
                selected: selected == Some(record.id()),
                cells: columns
                    .iter()
                    .map(|column| project_cell(record, column.field))
                    .collect(),
            })
            .collect();

        TableModel {
            headers,
            body: TableBody::Rows(rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::columns::{default_contract_columns, visible_columns};
    use crate::app::domain::{Contract, ContractField, PlanningField, PlanningItem};

    fn contract(id: &str, item: &str, cost: f64, year: i32) -> Contract {
        Contract {
            id: id.to_string(),
            item: item.to_string(),
            expected_cost: cost,
            year,
            ..Default::default()
        }
    }

    fn ids(rows: &[&Contract]) -> Vec<String> {
        rows.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_sort_toggles_and_resets() {
        let mut view = TableView::<ContractField>::new();
        view.request_sort(ContractField::Year);
        assert_eq!(view.sort().unwrap().direction, SortDirection::Ascending);
        view.request_sort(ContractField::Year);
        assert_eq!(view.sort().unwrap().direction, SortDirection::Descending);
        // Third click starts over
        view.request_sort(ContractField::Year);
        assert_eq!(view.sort().unwrap().direction, SortDirection::Ascending);

        view.request_sort(ContractField::Year);
        view.request_sort(ContractField::Item);
        assert_eq!(
            view.sort(),
            Some(SortState {
                field: ContractField::Item,
                direction: SortDirection::Ascending
            })
        );
    }

    #[test]
    fn test_sort_by_key() {
        let mut view = TableView::<PlanningField>::new();
        assert!(view.request_sort_key("budget"));
        assert_eq!(view.sort().unwrap().field, PlanningField::Budget);
        assert!(!view.request_sort_key("expected_cost"));
        assert_eq!(view.sort().unwrap().field, PlanningField::Budget);
    }

    #[test]
    fn test_sort_numbers_and_stability() {
        let a = contract("a", "x", 300.0, 2024);
        let b = contract("b", "x", 100.0, 2023);
        let c = contract("c", "x", 200.0, 2024);
        let rows = [&a, &b, &c];

        let mut view = TableView::new();
        assert_eq!(ids(&view.sorted(&rows)), vec!["a", "b", "c"]);

        view.request_sort(ContractField::ExpectedCost);
        assert_eq!(ids(&view.sorted(&rows)), vec!["b", "c", "a"]);
        view.request_sort(ContractField::ExpectedCost);
        assert_eq!(ids(&view.sorted(&rows)), vec!["a", "c", "b"]);

        // Equal years keep input order both ways
        view.request_sort(ContractField::Year);
        assert_eq!(ids(&view.sorted(&rows)), vec!["b", "a", "c"]);
        view.request_sort(ContractField::Year);
        assert_eq!(ids(&view.sorted(&rows)), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_resize_floor() {
        assert_eq!(resize_width(100, 10, 40), Some(130));
        assert_eq!(resize_width(100, 10, -39), Some(51));
        assert_eq!(resize_width(100, 10, -40), None);
        assert_eq!(resize_width(60, 200, 100), None);

        let drag = ResizeDrag::new("item", 0, 300);
        assert_eq!(
            drag.event_at(25),
            Some(TableEvent::ColumnResized {
                column: "item",
                width: 325
            })
        );
        assert_eq!(drag.event_at(-260), None);
    }

    #[test]
    fn test_empty_rows_render_one_placeholder() {
        let columns = visible_columns::<ContractField>(&default_contract_columns());
        let model = TableView::new().model::<Contract>(&columns, &[], None);
        assert!(model.is_placeholder());
        assert_eq!(model.row_count(), 1);
        assert_eq!(model.body, TableBody::Placeholder(EMPTY_PLACEHOLDER));
        assert_eq!(model.headers.len(), columns.len());
        assert!(model.row(0).is_none());
    }

    #[test]
    fn test_model_marks_selection_and_sort_header() {
        let a = contract("a", "Папір", 10.0, 2024);
        let b = contract("b", "Вода", 20.0, 2024);
        let columns = visible_columns::<ContractField>(&default_contract_columns());

        let mut view = TableView::new();
        view.request_sort(ContractField::Item);
        let model = view.model(&columns, &[&a, &b], Some("a"));

        assert_eq!(model.row_count(), 2);
        let first = model.row(0).unwrap();
        assert_eq!(first.id, "b");
        assert_eq!(first.number, 1);
        assert!(!first.selected);
        assert!(model.row(1).unwrap().selected);

        let item_header = model.headers.iter().find(|h| h.key == "item").unwrap();
        assert_eq!(item_header.sort, Some(SortDirection::Ascending));
        assert!(model.headers.iter().filter(|h| h.sort.is_some()).count() == 1);
    }

    #[test]
    fn test_cell_projection_by_role() {
        let c = Contract {
            id: "c".to_string(),
            expected_cost: 1234.5,
            contract_date: "2024-03-15".to_string(),
            legal_date: "не визначено".to_string(),
            du: true,
            prozorro_link: "https://prozorro.gov.ua/tender/1".to_string(),
            quantity: 3.0,
            ..Default::default()
        };
        assert_eq!(project_cell(&c, ContractField::Du), CellContent::Check(true));
        assert_eq!(project_cell(&c, ContractField::Reporting), CellContent::Check(false));
        assert_eq!(
            project_cell(&c, ContractField::ProzorroLink),
            CellContent::Link("https://prozorro.gov.ua/tender/1".to_string())
        );
        assert_eq!(project_cell(&c, ContractField::ContractFileName), CellContent::Missing);
        assert_eq!(
            project_cell(&c, ContractField::ExpectedCost),
            CellContent::Text("1\u{a0}234,50".to_string())
        );
        assert_eq!(
            project_cell(&c, ContractField::ContractDate),
            CellContent::Text("15 березня".to_string())
        );
        assert_eq!(
            project_cell(&c, ContractField::LegalDate),
            CellContent::Text("не визначено".to_string())
        );
        assert_eq!(project_cell(&c, ContractField::FinancialDate), CellContent::Text(String::new()));
        assert_eq!(project_cell(&c, ContractField::Quantity), CellContent::Text("3".to_string()));
        assert_eq!(CellContent::Missing.display_text(), MISSING_VALUE);
    }

    #[test]
    fn test_planning_cells_are_plain() {
        let item = PlanningItem {
            id: "p".to_string(),
            start_date: "2025-01-10".to_string(),
            ..Default::default()
        };
        assert_eq!(
            project_cell(&item, PlanningField::StartDate),
            CellContent::Text("2025-01-10".to_string())
        );
    }
}
