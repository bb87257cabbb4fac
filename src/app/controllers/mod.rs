//! Controllers layer - view state and list editing.
//!
//! This module contains the toolkit-independent controllers the UI drives:
//! - Table engine (sorting, resizing, cell projection)
//! - Collection editors for contracts and planning items
//! - Settings editor

pub mod collection;
pub mod settings_editor;
pub mod table;
