//! Resolve the configuration directory for `sheet-rules`.
//!
//! An environment override wins; otherwise the platform location provided by the
//! `directories` crate is used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "sheet-rules";

const CONFIG_DIR_ENV: &str = "SHEET_RULES_CONFIG_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for sheet-rules"))
}

/// An empty value is treated the same as an unset one.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the directory holding the user-wide `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn environment_override_wins() {
		let old = env::var_os(CONFIG_DIR_ENV);
		// SAFETY: this is the only test touching this variable.
		unsafe {
			env::set_var(CONFIG_DIR_ENV, "/tmp/sheet-rules-config");
		}
		assert_eq!(
			get_config_dir().unwrap(),
			PathBuf::from("/tmp/sheet-rules-config")
		);

		// SAFETY: restoring the value captured above.
		unsafe {
			match old {
				Some(value) => env::set_var(CONFIG_DIR_ENV, value),
				None => env::remove_var(CONFIG_DIR_ENV),
			}
		}
	}
}
