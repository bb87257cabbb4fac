use std::path::PathBuf;

use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

use crate::app::services::export::DEFAULT_EXPORT_FILE_NAME;

fn chosen_path(nfc: &NativeFileChooser) -> Option<PathBuf> {
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

/// Ask where to write the CSV export. The name is preset to `contracts.csv`.
pub fn csv_save_dialog() -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_title("Експорт в CSV");
    nfc.set_filter("CSV\t*.csv");
    nfc.set_preset_file(DEFAULT_EXPORT_FILE_NAME);
    nfc.set_option(FileDialogOptions::SaveAsConfirm);
    if let Ok(dir) = std::env::current_dir() {
        let _ = nfc.set_directory(&dir);
    }
    nfc.show();
    chosen_path(&nfc)
}

/// Pick the document a contract should link to
pub fn contract_file_dialog() -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_title("Файл договору");
    nfc.show();
    chosen_path(&nfc)
}
