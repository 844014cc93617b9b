//! Option resolution: caller input merged over built-in defaults.
//!
//! [`resolve`] is the entry point. It consults the [`ProjectProbe`] for browser
//! target declarations and an external postprocessor config, and derives the
//! module naming template from the [`BuildEnvironment`].

pub mod defaults;
mod error;
mod merge;
mod postcss;
mod raw;
mod resolved;

use std::env;

use serde_json::Value;

use sheet_rules_api::{Dialect, StepOptions};

pub use error::ResolveError;
pub use merge::{merge_options, merged};
pub use raw::{
	AutoprefixerSection, CapabilitiesSection, DialectSection, PartialOptions, PluginTransform,
	PostcssPlugin, PostcssPlugins, PostcssSection,
};
pub use resolved::{DialectOptions, FilePattern, PostcssOptions, ResolvedOptions};

use crate::environment::BuildEnvironment;
use crate::probe::ProjectProbe;
use postcss::PluginInputs;

const LOCAL_IDENT_NAME: &str = "localIdentName";

/// Resolve `partial` into an immutable [`ResolvedOptions`].
///
/// Resolution performs no writes; the same input and probe answers always yield an
/// equal result.
pub fn resolve(
	partial: PartialOptions,
	environment: BuildEnvironment,
	probe: &dyn ProjectProbe,
) -> Result<ResolvedOptions, ResolveError> {
	let PartialOptions {
		cwd,
		filename_hashing,
		modules,
		modules_with_affix,
		source_map,
		compress,
		use_poststylus,
		ssr,
		css_public_path,
		css,
		less,
		sass,
		stylus,
		postcss: postcss_section,
		autoprefixer,
		cssnano,
		capabilities,
	} = partial;

	let cwd = match cwd {
		Some(cwd) => cwd,
		None => env::current_dir().map_err(ResolveError::WorkingDirectory)?,
	};
	let is_development = environment.is_development;
	let source_map = source_map.unwrap_or(defaults::SOURCE_MAP);
	let compress = compress.unwrap_or(defaults::COMPRESS);

	let mut css = resolve_dialect(Dialect::Css, css)?;
	css.options = merged(
		sheet_loading_base(source_map),
		Some(std::mem::take(&mut css.options)),
	);
	let local_ident_name = match css.options.remove(LOCAL_IDENT_NAME) {
		Some(Value::String(template)) => template,
		_ if is_development => defaults::DEV_LOCAL_IDENT_NAME.to_string(),
		_ => defaults::PROD_LOCAL_IDENT_NAME.to_string(),
	};

	let mut sass = resolve_dialect(Dialect::Sass, sass)?;
	if let Some(capabilities) = &capabilities {
		inject_capability(&mut sass.options, "implementation", &capabilities.sass_implementation);
		inject_capability(&mut sass.options, "fiber", &capabilities.sass_fiber);
	}

	let explicit_browsers = autoprefixer
		.as_ref()
		.and_then(|section| section.browsers.clone());
	let browsers = postcss::browser_targets(&cwd, explicit_browsers, probe);

	let section = postcss_section.unwrap_or_default();
	let plugins = if postcss::has_postcss_config(&cwd, probe) {
		None
	} else {
		let minify =
			(compress && !is_development).then(|| postcss::minify_preset(cssnano, source_map));
		Some(postcss::synthesize_plugins(PluginInputs {
			caller: section.plugins,
			autoprefixer,
			browsers: browsers.clone(),
			minify,
		})?)
	};
	let postcss = PostcssOptions {
		test: FilePattern::compile(
			"postcss.test".into(),
			section.test.as_deref().unwrap_or(defaults::POSTCSS_TEST),
		)?,
		loader: section
			.loader
			.unwrap_or_else(|| defaults::POSTCSS_LOADER.to_string()),
		ident: section
			.ident
			.unwrap_or_else(|| defaults::POSTCSS_IDENT.to_string()),
		options: section.options.unwrap_or_default(),
		plugins,
	};

	let resolved = ResolvedOptions {
		context_directory: cwd,
		filename_hashing_enabled: filename_hashing.unwrap_or(defaults::FILENAME_HASHING),
		css_modules_global: modules.unwrap_or(defaults::MODULES),
		css_modules_by_affix: modules_with_affix.unwrap_or(defaults::MODULES_WITH_AFFIX),
		source_map_enabled: source_map,
		compress_enabled: compress,
		use_alternate_postprocessor: use_poststylus.unwrap_or(defaults::USE_POSTSTYLUS),
		is_development,
		is_server_rendering: ssr.unwrap_or(defaults::SSR),
		css_public_path,
		local_ident_name,
		browsers,
		css,
		less: resolve_dialect(Dialect::Less, less)?,
		sass,
		stylus: resolve_dialect(Dialect::Stylus, stylus)?,
		postcss,
	};

	tracing::debug!(
		cwd = %resolved.context_directory.display(),
		development = resolved.is_development,
		modules = resolved.css_modules_global,
		modules_with_affix = resolved.css_modules_by_affix,
		"resolved style rule options"
	);

	Ok(resolved)
}

impl PartialOptions {
	/// Resolve these options; see [`resolve`].
	pub fn resolve(
		self,
		environment: BuildEnvironment,
		probe: &dyn ProjectProbe,
	) -> Result<ResolvedOptions, ResolveError> {
		resolve(self, environment, probe)
	}
}

fn resolve_dialect(
	dialect: Dialect,
	section: Option<DialectSection>,
) -> Result<DialectOptions, ResolveError> {
	let base = defaults::dialect(dialect);
	let section = section.unwrap_or_default();
	let id = dialect.id();

	Ok(DialectOptions {
		test: FilePattern::compile(
			format!("{id}.test"),
			section.test.as_deref().unwrap_or(base.test),
		)?,
		affix: FilePattern::compile(
			format!("{id}.modules"),
			section.modules.as_deref().unwrap_or(base.affix),
		)?,
		loader: section.loader.unwrap_or_else(|| base.loader.to_string()),
		options: merged((base.options)(), section.options),
	})
}

/// Dialect-agnostic sheet-loading options the caller's CSS options merge over.
fn sheet_loading_base(source_map: bool) -> StepOptions {
	let mut options = StepOptions::new();
	options.insert("importLoaders".into(), Value::from(2));
	options.insert("sourceMap".into(), Value::from(source_map));
	options
}

fn inject_capability(options: &mut StepOptions, key: &str, value: &Option<String>) {
	if let Some(value) = value
		&& !options.contains_key(key)
	{
		options.insert(key.to_string(), Value::from(value.as_str()));
	}
}

#[cfg(test)]
mod tests;
