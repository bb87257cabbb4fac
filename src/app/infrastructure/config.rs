use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "CONTRACT_DESK_DATA_DIR";

const APP_DIR_NAME: &str = "contract-desk";

/// Directory holding the persisted records (cross-platform)
pub fn data_dir() -> PathBuf {
    resolve_data_dir(std::env::var_os(DATA_DIR_ENV), dirs::data_dir())
}

fn resolve_data_dir(override_dir: Option<OsString>, platform_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    let mut path = platform_dir.unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR_NAME);
    path
}
