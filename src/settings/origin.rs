use std::fmt;
use std::path::PathBuf;

use config::Config;
use sheet_rules::{PartialOptions, ResolveError};
use thiserror::Error;

use super::sources::{Layer, environment_variable};

/// Where the effective value of a setting came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	Default(String),
	CliFlag(&'static str),
	Environment(String),
	ConfigFile { path: PathBuf, key: String },
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Default(key) => write!(f, "the default for `{key}`"),
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigFile { path, key } => {
				write!(f, "configuration key `{key}` in `{}`", path.display())
			}
		}
	}
}

/// A resolution failure attributed to the layer that supplied the bad value.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}")]
pub(crate) struct SettingsError {
	pub(crate) key: String,
	pub(crate) origin: SettingSource,
	#[source]
	pub(crate) source: ResolveError,
}

/// Each configuration layer loaded on its own, for attribution.
#[derive(Debug, Default)]
pub(crate) struct ConfigSources {
	layers: Vec<(Layer, Config)>,
}

impl ConfigSources {
	/// Layers that fail to load on their own are skipped; the merged load reports them.
	pub(super) fn collect(layers: &[Layer]) -> Self {
		let layers = layers
			.iter()
			.filter_map(|layer| layer.build().ok().map(|config| (layer.clone(), config)))
			.collect();
		Self { layers }
	}

	/// Origin of the effective value for the dotted `key`.
	///
	/// `cli_flag` names the flag when the user passed it on the command line.
	pub(crate) fn origin(&self, key: &str, cli_flag: Option<&'static str>) -> SettingSource {
		if let Some(flag) = cli_flag {
			return SettingSource::CliFlag(flag);
		}

		let supplying = self
			.layers
			.iter()
			.rev()
			.find(|(_, config)| config.get::<config::Value>(key).is_ok());
		match supplying {
			Some((Layer::File { path, .. }, _)) => SettingSource::ConfigFile {
				path: path.clone(),
				key: key.to_string(),
			},
			Some((Layer::Environment, _)) => SettingSource::Environment(environment_variable(key)),
			None => SettingSource::Default(key.to_string()),
		}
	}

	/// The first layer whose contents do not form valid options on their own.
	pub(crate) fn rejecting_layer(&self) -> Option<&Layer> {
		self.layers
			.iter()
			.find(|(_, config)| config.clone().try_deserialize::<PartialOptions>().is_err())
			.map(|(layer, _)| layer)
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	fn file_layer(path: PathBuf) -> Layer {
		Layer::File {
			path,
			required: true,
		}
	}

	#[test]
	fn later_files_win_attribution() {
		let dir = tempdir().expect("tempdir");
		let base = dir.path().join("base.toml");
		let local = dir.path().join("local.toml");
		fs::write(&base, "[less]\ntest = 'a'\nloader = 'base-loader'\n").expect("write");
		fs::write(&local, "[less]\ntest = 'b'\n").expect("write");

		let sources = ConfigSources::collect(&[file_layer(base.clone()), file_layer(local.clone())]);
		assert_eq!(
			sources.origin("less.test", None),
			SettingSource::ConfigFile {
				path: local,
				key: "less.test".into()
			}
		);
		assert_eq!(
			sources.origin("less.loader", None),
			SettingSource::ConfigFile {
				path: base,
				key: "less.loader".into()
			}
		);
		assert_eq!(
			sources.origin("sass.test", None),
			SettingSource::Default("sass.test".into())
		);
		assert_eq!(
			sources.origin("cwd", Some("--cwd")),
			SettingSource::CliFlag("--cwd")
		);
	}

	#[test]
	fn rejecting_layer_names_the_offending_file() {
		let dir = tempdir().expect("tempdir");
		let good = dir.path().join("good.toml");
		let bad = dir.path().join("bad.toml");
		fs::write(&good, "modules = true\n").expect("write");
		fs::write(&bad, "moduels = true\n").expect("write");

		let sources = ConfigSources::collect(&[file_layer(good), file_layer(bad.clone())]);
		assert_eq!(sources.rejecting_layer(), Some(&file_layer(bad)));
	}
}
