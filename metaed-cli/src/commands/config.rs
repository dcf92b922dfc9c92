use std::path::Path;

use metaed_lib::settings::{
    add_storage_root, load_settings_string, remove_storage_root, settings_path,
};

use crate::error::CliError;

pub(crate) fn run_config_show() {
    let path = settings_path();
    match load_settings_string() {
        Some(contents) => {
            log::info!("# {}", path.display());
            log::info!("{}", contents.trim_end());
        }
        None => log::info!("No settings file at {}", path.display()),
    }
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

pub(crate) fn run_config_add_root(root: &Path) -> Result<(), CliError> {
    if add_storage_root(root)? {
        log::info!("Added storage root {}", root.display());
    } else {
        log::info!("{} is already a storage root", root.display());
    }
    Ok(())
}

pub(crate) fn run_config_remove_root(root: &Path) -> Result<(), CliError> {
    if remove_storage_root(root)? {
        log::info!("Removed storage root {}", root.display());
    } else {
        log::warn!("{} was not a configured storage root", root.display());
    }
    Ok(())
}
