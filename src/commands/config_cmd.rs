use std::env;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::config::{Config, config_file_path, ensure_config_file};
use crate::error::AppError;
use crate::utils::display_path;

pub struct ConfigOptions {
    pub show_path: bool,
    pub edit: bool,
    pub set_decimals: Option<i32>,
}

impl ConfigOptions {
    /// True when no flag was given; the command then just reports the path.
    fn is_bare(&self) -> bool {
        !self.show_path && !self.edit && self.set_decimals.is_none()
    }
}

pub fn execute_config(options: ConfigOptions) -> Result<(), AppError> {
    if options.show_path || options.is_bare() {
        println!("Config file: {}", display_path(&config_file_path()?));
    }

    if let Some(decimals) = options.set_decimals {
        store_decimals(decimals)?;
        println!("Default decimals set to {decimals}.");
    }

    if options.edit {
        edit_in_place(&ensure_config_file()?)?;
    }

    Ok(())
}

/// Load, update and write back the config so other keys are preserved.
fn store_decimals(decimals: i32) -> Result<(), AppError> {
    let mut config = Config::load()?;
    config.set_decimals(decimals)?;
    config.save()?;
    debug!(decimals, "stored default decimals");
    Ok(())
}

fn edit_in_place(path: &Path) -> Result<(), AppError> {
    let editor = preferred_editor();
    debug!(editor = ?editor, path = %path.display(), "launching editor");

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|err| AppError::Editor(format!("{}: {err}", editor.to_string_lossy())))?;

    if !status.success() {
        return Err(AppError::Editor(format!(
            "{} exited with {status}",
            editor.to_string_lossy()
        )));
    }
    Ok(())
}

/// `$VISUAL`, then `$EDITOR`, then `vi`.
fn preferred_editor() -> OsString {
    ["VISUAL", "EDITOR"]
        .into_iter()
        .filter_map(env::var_os)
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| OsString::from("vi"))
}
