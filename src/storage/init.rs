//! Storage initialization
//!
//! First-run setup: directories, empty collection files and default settings.

use crate::config::paths::TallyPaths;
use crate::config::settings::Settings;
use crate::error::TallyError;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Existing files are left alone.
pub fn initialize_storage(paths: &TallyPaths) -> Result<(), TallyError> {
    paths.ensure_directories()?;

    for file in [
        paths.expenses_file(),
        paths.jobs_file(),
        paths.work_entries_file(),
        paths.salary_payments_file(),
    ] {
        if !file.exists() {
            write_json_atomic(&file, &Vec::<serde_json::Value>::new())?;
            log::info!("created {}", file.display());
        }
    }

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
        log::info!("wrote default settings to {}", paths.settings_file().display());
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &TallyPaths) -> bool {
    !paths.is_initialized()
}
