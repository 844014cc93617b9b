use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use sheet_rules::app_dirs;

use crate::cli::CliArgs;

const ENV_PREFIX: &str = "sheet_rules";

/// One configuration layer, in increasing precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Layer {
	File { path: PathBuf, required: bool },
	Environment,
}

impl Layer {
	fn add_to(
		&self,
		builder: config::ConfigBuilder<config::builder::DefaultState>,
	) -> config::ConfigBuilder<config::builder::DefaultState> {
		match self {
			Self::File { path, required } => {
				builder.add_source(File::from(path.clone()).required(*required))
			}
			Self::Environment => builder.add_source(environment_source()),
		}
	}

	/// Build a [`Config`] holding only this layer.
	pub(super) fn build(&self) -> Result<Config, ConfigError> {
		self.add_to(Config::builder()).build()
	}
}

impl fmt::Display for Layer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::File { path, .. } => write!(f, "configuration file `{}`", path.display()),
			Self::Environment => f.write_str("`SHEET_RULES__*` environment variables"),
		}
	}
}

/// Layers consulted for `cli`, lowest precedence first.
pub(super) fn config_layers(cli: &CliArgs) -> Vec<Layer> {
	let mut layers = Vec::new();

	if !cli.no_config {
		for path in default_config_files() {
			layers.push(Layer::File {
				path,
				required: false,
			});
		}
	}

	for path in &cli.config {
		layers.push(Layer::File {
			path: path.clone(),
			required: true,
		});
	}

	layers.push(Layer::Environment);
	layers
}

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(layers: &[Layer]) -> Result<Config> {
	let builder = layers
		.iter()
		.fold(Config::builder(), |builder, layer| layer.add_to(builder));

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn environment_source() -> Environment {
	Environment::with_prefix(ENV_PREFIX)
		.separator("__")
		.try_parsing(true)
		.list_separator(",")
		.with_list_parse_key("autoprefixer.browsers")
}

/// Name of the environment variable that sets the dotted `key`.
pub(super) fn environment_variable(key: &str) -> String {
	format!(
		"{}__{}",
		ENV_PREFIX.to_ascii_uppercase(),
		key.replace('.', "__").to_ascii_uppercase()
	)
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".sheet-rules.toml"));
		files.push(current_dir.join("sheet-rules.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".sheet-rules.toml")));
		assert!(files.iter().any(|path| path.ends_with("sheet-rules.toml")));
	}

	#[test]
	fn explicit_files_follow_defaults_and_precede_the_environment() {
		let cli = CliArgs::parse_from(["sheet-rules", "-n", "-c", "a.toml", "-c", "b.toml"]);
		assert_eq!(
			config_layers(&cli),
			vec![
				Layer::File {
					path: PathBuf::from("a.toml"),
					required: true
				},
				Layer::File {
					path: PathBuf::from("b.toml"),
					required: true
				},
				Layer::Environment,
			]
		);
	}

	#[test]
	fn environment_variables_mirror_dotted_keys() {
		assert_eq!(environment_variable("less.test"), "SHEET_RULES__LESS__TEST");
		assert_eq!(environment_variable("cwd"), "SHEET_RULES__CWD");
	}
}
