use crate::app::domain::{AppSettings, ThemeMode};

/// Working copy behind the settings dialog. Nothing reaches the
/// application until `commit` hands the edited settings back.
#[derive(Debug, Clone)]
pub struct SettingsEditor {
    draft: AppSettings,
}

impl SettingsEditor {
    pub fn new(current: &AppSettings) -> Self {
        Self {
            draft: current.clone(),
        }
    }

    pub fn draft(&self) -> &AppSettings {
        &self.draft
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.draft.theme = theme;
    }

    pub fn set_font(&mut self, font: impl Into<String>) {
        self.draft.font = font.into();
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.draft.font_size = size;
    }

    /// Flip visibility of one column. Order and widths are left alone.
    pub fn toggle_column(&mut self, key: &str) -> bool {
        self.draft.toggle_column(key)
    }

    pub fn commit(self) -> AppSettings {
        self.draft
    }

    pub fn cancel(self) {}
}
