//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Contract and PlanningItem records
//! - Field descriptors and column settings
//! - Application settings
//! - Message types for the event system

pub mod columns;
pub mod contract;
pub mod messages;
pub mod planning;
pub mod record;
pub mod settings;

pub use columns::{ColumnConfig, ColumnView, DEFAULT_COLUMN_WIDTH};
pub use contract::{Contract, ContractField, ProcurementType};
pub use messages::{Message, Tab, TableId};
pub use planning::{PlanningField, PlanningItem};
pub use record::{FieldRole, FieldSpec, FieldValue, Record};
pub use settings::{AppSettings, ThemeMode};
