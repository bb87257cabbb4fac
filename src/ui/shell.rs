use chrono::Datelike;
use fltk::{dialog, prelude::*};

use super::dialogs::about::show_about_dialog;
use super::dialogs::confirm_delete;
use super::dialogs::contract_dialog::show_contract_dialog;
use super::dialogs::planning_dialog::show_planning_dialog;
use super::dialogs::settings_dialog::show_settings_dialog;
use super::file_dialogs::csv_save_dialog;
use super::main_window::{ALL_YEARS_LABEL, MainWidgets};
use super::menu::DARK_THEME_ITEM;
use super::theme::{apply_theme, palette};
#[cfg(target_os = "windows")]
use super::theme::set_windows_titlebar_theme;
use crate::app::controllers::collection::{ContractsEditor, PlanningEditor, planning_columns};
use crate::app::controllers::table::TableEvent;
use crate::app::domain::{AppSettings, Contract, Message, PlanningItem, Tab, TableId};
use crate::app::services::export::write_export;
use crate::app::services::format::format_currency;
use crate::app::services::stats::StatisticsView;
use crate::app::state::AppState;

const CONFIRM_DELETE_CONTRACT: &str = "Ви впевнені, що хочете видалити цей договір?";
const CONFIRM_DELETE_PLAN: &str = "Ви впевнені, що хочете видалити цей план?";

/// Owns the state, the editors and the widgets, and turns channel
/// messages into state changes followed by a view refresh.
pub struct Shell {
    state: AppState,
    widgets: MainWidgets,
    contracts: ContractsEditor,
    planning: PlanningEditor,
}

impl Shell {
    pub fn new(state: AppState, widgets: MainWidgets) -> Self {
        let mut shell = Self {
            state,
            widgets,
            contracts: ContractsEditor::new(),
            planning: PlanningEditor::new(),
        };
        shell.apply_settings();
        shell.refresh_contracts();
        shell.refresh_planning();
        shell.refresh_statistics();
        shell
    }

    pub fn show(&mut self) {
        self.widgets.wind.show();
        // The title bar needs a native handle, which exists only after show()
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.widgets.wind, self.state.settings().theme.is_dark());
    }

    /// Handle one message. Returns false once the application should exit.
    pub fn dispatch(&mut self, msg: Message) -> bool {
        tracing::trace!(?msg, "Dispatch");
        match msg {
            Message::SwitchTab(tab) => self.switch_tab(tab),

            Message::ContractSearch(term) => {
                self.contracts.collection_mut().set_search(term);
                self.refresh_contracts();
            }
            Message::ContractYearFilter(year) => {
                self.contracts.set_year_filter(year);
                self.refresh_contracts();
            }
            Message::ContractAdd => self.add_contract(),
            Message::ContractEditSelected => {
                if let Some(id) = self
                    .contracts
                    .collection()
                    .selected_record(self.state.contracts())
                    .map(|c| c.id.clone()) {
                    self.edit_contract(&id);
                }
            }
            Message::ContractDeleteSelected => {
                if let Some(id) = self
                    .contracts
                    .collection()
                    .selected_record(self.state.contracts())
                    .map(|c| c.id.clone()) {
                    self.delete_contract(&id);
                }
            }
            Message::ContractExport => self.export_contracts(),

            Message::PlanningSearch(term) => {
                self.planning.set_search(term);
                self.refresh_planning();
            }
            Message::PlanningAdd => self.add_planning_item(),
            Message::PlanningEditSelected => {
                if let Some(id) = self
                    .planning
                    .selected_record(self.state.planning_items())
                    .map(|p| p.id.clone()) {
                    self.edit_planning_item(&id);
                }
            }
            Message::PlanningDeleteSelected => {
                if let Some(id) = self
                    .planning
                    .selected_record(self.state.planning_items())
                    .map(|p| p.id.clone()) {
                    self.delete_planning_item(&id);
                }
            }

            Message::Table(TableId::Contracts, event) => self.contract_table_event(event),
            Message::Table(TableId::Planning, event) => self.planning_table_event(event),

            Message::ToggleTheme => {
                self.state.toggle_theme();
                self.apply_settings();
            }
            Message::OpenSettings => self.open_settings(),
            Message::ShowAbout => show_about_dialog(),

            Message::Quit => return false,
        }
        true
    }

    // --- Navigation ---

    fn switch_tab(&mut self, tab: Tab) {
        let group = self.widgets.page_group(tab).clone();
        if self.widgets.tabs.value().is_none_or(|current| current.label() != tab.label()) {
            if let Err(e) = self.widgets.tabs.set_value(&group) {
                tracing::warn!(tab = tab.label(), "Failed to switch tab: {}", e);
            }
        }
        if tab == Tab::Statistics {
            self.refresh_statistics();
        }
        self.widgets.tabs.redraw();
    }

    // --- Contracts ---

    fn add_contract(&mut self) {
        let draft = Contract::draft(chrono::Local::now().year());
        if let Some(contract) = show_contract_dialog(&draft, true) {
            let (updated, id) = self.contracts.collection().create(self.state.contracts(), contract);
            self.state.replace_contracts(updated);
            self.contracts.collection_mut().select(Some(id));
            self.contracts_changed();
        }
    }

    fn edit_contract(&mut self, id: &str) {
        let Some(existing) = self.state.contracts().iter().find(|c| c.id == id).cloned() else {
            return;
        };
        if let Some(contract) = show_contract_dialog(&existing, false) {
            let updated = self.contracts.collection().save(self.state.contracts(), contract);
            self.state.replace_contracts(updated);
            self.contracts_changed();
        }
    }

    fn delete_contract(&mut self, id: &str) {
        let contracts = self.state.contracts().to_vec();
        if let Some(updated) = self
            .contracts
            .collection_mut()
            .delete(&contracts, id, || confirm_delete(CONFIRM_DELETE_CONTRACT))
        {
            self.state.replace_contracts(updated);
            self.contracts_changed();
        }
    }

    fn contract_table_event(&mut self, event: TableEvent) {
        if self.contracts.collection_mut().apply_view_event(&event) {
            self.refresh_contracts();
            return;
        }
        match event {
            TableEvent::EditRequested(id) => self.edit_contract(&id),
            TableEvent::DeleteRequested(id) => self.delete_contract(&id),
            TableEvent::OpenLink(url) => open_external(&url),
            TableEvent::OpenFile(id) => {
                let target = self
                    .state
                    .contracts()
                    .iter()
                    .find(|c| c.id == id)
                    .and_then(|c| c.file_target())
                    .map(str::to_string);
                if let Some(target) = target {
                    open_external(&target);
                }
            }
            TableEvent::ColumnResized { column, width } => {
                self.state.set_contract_column_width(column, width);
                self.refresh_contracts();
            }
            TableEvent::SortRequested(_) | TableEvent::RowSelected(_) => {}
        }
    }

    fn export_contracts(&mut self) {
        let csv = self
            .contracts
            .export(self.state.contracts(), &self.state.settings().column_visibility);
        let Some(path) = csv_save_dialog() else {
            return;
        };
        if let Err(e) = write_export(&path, &csv) {
            tracing::error!(path = %path.display(), "Export failed: {}", e);
            dialog::alert_default(&format!("Не вдалося експортувати файл: {}", e));
        }
    }

    fn contracts_changed(&mut self) {
        self.refresh_contracts();
        self.refresh_statistics();
    }

    fn refresh_contracts(&mut self) {
        let contracts = self.state.contracts();
        let columns = &self.state.settings().column_visibility;

        let years = self.contracts.available_years(contracts);
        if let Some(year) = self.contracts.year_filter()
            && !years.contains(&year)
        {
            self.contracts.set_year_filter(None);
        }

        let year_choice = &mut self.widgets.contracts.year;
        year_choice.clear();
        year_choice.add_choice(ALL_YEARS_LABEL);
        for year in &years {
            year_choice.add_choice(&year.to_string());
        }
        let selected = self
            .contracts
            .year_filter()
            .and_then(|year| years.iter().position(|y| *y == year))
            .map_or(0, |i| i as i32 + 1);
        year_choice.set_value(selected);

        let summary = self.contracts.summary(contracts);
        self.widgets.contracts.summary.set_label(&format!(
            "Відфільтровано записів: {}, Загальна вартість: {} ₴",
            summary.count,
            format_currency(summary.total_cost)
        ));

        let model = self.contracts.model(contracts, columns);
        self.widgets.contracts.table.set_model(model);
        self.widgets.contracts.group.redraw();
    }

    // --- Planning ---

    fn add_planning_item(&mut self) {
        if let Some(item) = show_planning_dialog(&PlanningItem::default(), true) {
            let (updated, id) = self.planning.create(self.state.planning_items(), item);
            self.state.replace_planning_items(updated);
            self.planning.select(Some(id));
            self.refresh_planning();
        }
    }

    fn edit_planning_item(&mut self, id: &str) {
        let Some(existing) = self.state.planning_items().iter().find(|p| p.id == id).cloned() else {
            return;
        };
        if let Some(item) = show_planning_dialog(&existing, false) {
            let updated = self.planning.save(self.state.planning_items(), item);
            self.state.replace_planning_items(updated);
            self.refresh_planning();
        }
    }

    fn delete_planning_item(&mut self, id: &str) {
        let items = self.state.planning_items().to_vec();
        if let Some(updated) = self
            .planning
            .delete(&items, id, || confirm_delete(CONFIRM_DELETE_PLAN))
        {
            self.state.replace_planning_items(updated);
            self.refresh_planning();
        }
    }

    fn planning_table_event(&mut self, event: TableEvent) {
        if self.planning.apply_view_event(&event) {
            self.refresh_planning();
            return;
        }
        match event {
            TableEvent::EditRequested(id) => self.edit_planning_item(&id),
            TableEvent::DeleteRequested(id) => self.delete_planning_item(&id),
            other => tracing::debug!(?other, "Planning table event ignored"),
        }
    }

    fn refresh_planning(&mut self) {
        let items = self.state.planning_items();
        let rows = self.planning.filtered(items);
        let model = self.planning.model(&planning_columns(), &rows);
        self.widgets.planning.table.set_model(model);
        self.widgets.planning.group.redraw();
    }

    // --- Statistics ---

    fn refresh_statistics(&mut self) {
        let view = StatisticsView::from_contracts(self.state.contracts());
        self.widgets.statistics.view.set_view(view);
    }

    // --- Settings ---

    fn open_settings(&mut self) {
        if let Some(settings) = show_settings_dialog(self.state.settings()) {
            self.state.replace_settings(settings);
            self.apply_settings();
            self.refresh_contracts();
        }
    }

    /// Push theme and font settings into every widget
    fn apply_settings(&mut self) {
        let AppSettings {
            theme, font, font_size, ..
        } = self.state.settings().clone();
        let is_dark = theme.is_dark();

        apply_theme(&mut self.widgets.wind, &mut self.widgets.menu, is_dark);
        #[cfg(target_os = "windows")]
        set_windows_titlebar_theme(&self.widgets.wind, is_dark);
        self.update_menu_checkbox(DARK_THEME_ITEM, is_dark);

        for table in [&mut self.widgets.contracts.table, &mut self.widgets.planning.table] {
            table.apply_theme(is_dark);
            table.set_font(&font, font_size);
        }
        self.widgets.statistics.view.apply_theme(is_dark);
        self.widgets.contracts.summary.set_label_color(palette(is_dark).total);
        self.widgets.wind.redraw();
    }

    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.widgets.menu.find_index(path);
        if idx >= 0
            && let Some(mut item) = self.widgets.menu.at(idx)
        {
            if checked {
                item.set();
            } else {
                item.clear();
            }
        }
    }
}

/// Hand a URL or file path to the platform opener
fn open_external(target: &str) {
    tracing::info!(target, "Opening externally");
    if let Err(e) = open::that(target) {
        tracing::warn!(target, "Failed to open: {}", e);
        dialog::alert_default(&format!("Не вдалося відкрити: {}", e));
    }
}
