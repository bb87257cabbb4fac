use super::domain::{AppSettings, Contract, PlanningItem};
use super::infrastructure::storage::PersistenceGateway;
use super::services::ids::assign_missing_ids;

/// Canonical in-memory copy of everything the application shows.
///
/// Loaded once at startup. Every mutation replaces the affected list (or
/// the settings) and is written through the gateway before returning.
pub struct AppState {
    gateway: PersistenceGateway,
    contracts: Vec<Contract>,
    planning_items: Vec<PlanningItem>,
    settings: AppSettings,
}

impl AppState {
    /// Records stored without an id get a fresh one here, and the repaired
    /// list is written back before anything can edit or delete it.
    pub fn load(mut gateway: PersistenceGateway) -> Self {
        let mut contracts = gateway.load_contracts();
        let mut planning_items = gateway.load_planning_items();
        let settings = gateway.load_settings();

        let repaired = assign_missing_ids(&mut contracts);
        if repaired > 0 {
            tracing::warn!(repaired, "Stored contracts without id were given fresh ids");
            gateway.save_contracts(&contracts);
        }
        let repaired = assign_missing_ids(&mut planning_items);
        if repaired > 0 {
            tracing::warn!(repaired, "Stored planning items without id were given fresh ids");
            gateway.save_planning_items(&planning_items);
        }

        tracing::info!(
            contracts = contracts.len(),
            planning_items = planning_items.len(),
            "State loaded"
        );
        Self {
            gateway,
            contracts,
            planning_items,
            settings,
        }
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn planning_items(&self) -> &[PlanningItem] {
        &self.planning_items
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn replace_contracts(&mut self, contracts: Vec<Contract>) {
        self.contracts = contracts;
        self.gateway.save_contracts(&self.contracts);
    }

    pub fn replace_planning_items(&mut self, items: Vec<PlanningItem>) {
        self.planning_items = items;
        self.gateway.save_planning_items(&self.planning_items);
    }

    pub fn replace_settings(&mut self, settings: AppSettings) {
        self.settings = settings;
        self.gateway.save_settings(&self.settings);
    }

    pub fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        self.gateway.save_settings(&self.settings);
    }

    /// Store a resized contract column width. Unknown keys are ignored.
    pub fn set_contract_column_width(&mut self, key: &str, width: u32) {
        if self.settings.set_column_width(key, width) {
            self.gateway.save_settings(&self.settings);
        } else {
            tracing::debug!(key, "Resize for unknown column ignored");
        }
    }
}
