use serde::{Deserialize, Serialize};

use super::columns::{ColumnConfig, default_contract_columns};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Світла",
            ThemeMode::Dark => "Темна",
        }
    }
}

/// Font families offered in the settings dialog
pub const FONT_FAMILIES: [&str; 3] = ["sans-serif", "serif", "monospace"];

/// Font sizes offered in the settings dialog
pub const FONT_SIZES: [u32; 3] = [12, 14, 16];

/// Display preferences. Every field carries its own serde default, so a
/// persisted object missing a field (written before the field existed)
/// loads with that field's default and keeps everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub theme: ThemeMode,

    #[serde(default = "default_font")]
    pub font: String,

    #[serde(default = "default_font_size", alias = "fontSize")]
    pub font_size: u32,

    /// Contract table columns, in display order
    #[serde(default = "default_contract_columns", alias = "columnVisibility")]
    pub column_visibility: Vec<ColumnConfig>,
}

fn default_font() -> String {
    "sans-serif".to_string()
}

fn default_font_size() -> u32 {
    14
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            font: default_font(),
            font_size: default_font_size(),
            column_visibility: default_contract_columns(),
        }
    }
}

impl AppSettings {
    /// Store a new width for the column with `key`. Returns false when no
    /// such column exists.
    pub fn set_column_width(&mut self, key: &str, width: u32) -> bool {
        match self.column_visibility.iter_mut().find(|c| c.key == key) {
            Some(column) => {
                column.width = Some(width);
                true
            }
            None => false,
        }
    }

    /// Flip visibility of the column with `key`. Returns false when no
    /// such column exists.
    pub fn toggle_column(&mut self, key: &str) -> bool {
        match self.column_visibility.iter_mut().find(|c| c.key == key) {
            Some(column) => {
                column.visible = !column.visible;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, ThemeMode::Light);
        assert_eq!(settings.font, "sans-serif");
        assert_eq!(settings.font_size, 14);
        assert_eq!(settings.column_visibility, default_contract_columns());
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        // Simulate old settings written before font_size existed
        let json = r#"{"theme": "dark", "font": "serif"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 14); // Should use default
        assert_eq!(settings.theme, ThemeMode::Dark); // Should use file value
        assert_eq!(settings.font, "serif");
        assert_eq!(settings.column_visibility, default_contract_columns());
    }

    #[test]
    fn test_persisted_columns_are_kept_as_is() {
        let json = r#"{
            "theme": "light",
            "column_visibility": [
                {"key": "year", "label": "Рік", "visible": true, "width": 90}
            ]
        }"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.column_visibility.len(), 1);
        assert_eq!(settings.column_visibility[0].width, Some(90));
    }

    #[test]
    fn test_camel_case_keys_are_accepted() {
        let json = r#"{"theme": "dark", "fontSize": 16, "columnVisibility": []}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 16);
        assert!(settings.column_visibility.is_empty());
    }

    #[test]
    fn test_theme_mode_serialization() {
        let settings = AppSettings {
            theme: ThemeMode::Dark,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"dark\""));
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn test_set_column_width_and_toggle() {
        let mut settings = AppSettings::default();
        assert!(settings.set_column_width("item", 420));
        assert_eq!(settings.column_visibility[0].width, Some(420));
        assert!(!settings.set_column_width("nope", 420));

        assert!(settings.toggle_column("kekv"));
        let kekv = settings.column_visibility.iter().find(|c| c.key == "kekv").unwrap();
        assert!(kekv.visible);
        assert!(!settings.toggle_column("nope"));
    }
}
