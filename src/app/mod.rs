//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Contract, PlanningItem, Settings, Messages)
//! - `controllers/` - Orchestration (TableView, collection editors, settings editor)
//! - `services/` - Pure operations (formatting, search, export, statistics, sample data)
//! - `infrastructure/` - External integrations (key-value storage, logging, error)
//! - `state.rs` - Canonical in-memory state and persistence fan-out
//!
//! Nothing in here depends on the GUI toolkit, so every piece can be tested
//! without a display.

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::collection::{CollectionEditor, ContractsEditor, PlanningEditor};
pub use controllers::settings_editor::SettingsEditor;
pub use controllers::table::{TableEvent, TableModel, TableView};
pub use domain::{
    AppSettings, ColumnConfig, Contract, ContractField, FieldRole, Message, PlanningField,
    PlanningItem, ProcurementType, Record, Tab, ThemeMode,
};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::storage::{FileStore, KeyValueStore, MemoryStore, PersistenceGateway};
pub use state::AppState;
