use anyhow::{Context, Result};
use sheet_rules::{BuildEnvironment, FsProbe, PartialOptions, ResolveError, ResolvedOptions};

use super::origin::{ConfigSources, SettingsError};
use super::overrides::cli_overrides;
use super::sources::{build_config, config_layers};
use crate::cli::CliArgs;

/// Load options by combining config files, environment variables and CLI flags,
/// then resolve them against the project directory.
///
/// Failures name the configuration layer that supplied the offending value.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedOptions> {
	let layers = config_layers(cli);
	let sources = ConfigSources::collect(&layers);
	let builder = build_config(&layers)?;
	let mut partial: PartialOptions = builder.try_deserialize().with_context(|| {
		match sources.rejecting_layer() {
			Some(layer) => format!("failed to deserialize configuration from {layer}"),
			None => "failed to deserialize configuration".to_string(),
		}
	})?;
	partial.merge(cli_overrides(cli));

	let environment = cli
		.mode
		.map(|mode| mode.environment())
		.unwrap_or_else(BuildEnvironment::from_env);
	tracing::debug!(
		?environment,
		cwd = %sources.origin("cwd", cli.cwd.as_ref().map(|_| "--cwd")),
		"resolving sheet-rules options"
	);

	partial.resolve(environment, &FsProbe).map_err(|err| {
		let pattern_key = match &err {
			ResolveError::InvalidPattern { key, .. } => Some(key.clone()),
			_ => None,
		};
		match pattern_key {
			Some(key) => {
				let origin = sources.origin(&key, None);
				anyhow::Error::new(SettingsError {
					key,
					origin,
					source: err,
				})
			}
			None => anyhow::Error::new(err).context("failed to resolve options"),
		}
	})
}
