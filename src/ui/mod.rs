//! FLTK front end. Everything here is a thin shell over `crate::app`.

pub mod data_table;
pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod shell;
pub mod stats_view;
pub mod theme;
