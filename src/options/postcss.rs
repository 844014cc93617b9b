//! Browser-target detection and postprocessor plugin synthesis.

use std::path::Path;

use serde_json::{Value, json};

use sheet_rules_api::StepOptions;

use super::defaults::{self, object};
use super::error::ResolveError;
use super::merge::merged;
use super::raw::{AutoprefixerSection, PostcssPlugin, PostcssPlugins};
use crate::probe::ProjectProbe;

/// Browser targets to inject, or `None` when the project already declares them.
pub(super) fn browser_targets(
	cwd: &Path,
	explicit: Option<Vec<String>>,
	probe: &dyn ProjectProbe,
) -> Option<Vec<String>> {
	if explicit.is_some() {
		return explicit;
	}
	if let Some(file) = probe.find_existing(cwd, &defaults::BROWSERSLIST_FILES) {
		tracing::debug!(file, "using project browserslist file");
		return None;
	}
	let declared_in_manifest = probe.read_manifest(cwd).is_some_and(|manifest| {
		["browserslist", "browserlist"]
			.iter()
			.any(|field| manifest.get(*field).is_some_and(declares_value))
	});
	if declared_in_manifest {
		tracing::debug!("using browserslist field of the project manifest");
		return None;
	}
	Some(defaults::default_browsers())
}

pub(super) fn has_postcss_config(cwd: &Path, probe: &dyn ProjectProbe) -> bool {
	match probe.find_existing(cwd, &defaults::POSTCSS_CONFIG_FILES) {
		Some(file) => {
			tracing::debug!(file, "using external postcss config");
			true
		}
		None => false,
	}
}

/// Settings consumed by [`synthesize_plugins`].
pub(super) struct PluginInputs {
	pub(super) caller: Option<PostcssPlugins>,
	pub(super) autoprefixer: Option<AutoprefixerSection>,
	pub(super) browsers: Option<Vec<String>>,
	/// Minifier preset options; `None` disables minification.
	pub(super) minify: Option<StepOptions>,
}

/// Build the postprocessor plugin list used when the project has no config of its own.
pub(super) fn synthesize_plugins(inputs: PluginInputs) -> Result<Vec<PostcssPlugin>, ResolveError> {
	let builtin = vec![
		PostcssPlugin::new(defaults::FLEXBUGS_FIXES),
		autoprefixer(inputs.autoprefixer, inputs.browsers),
	];

	let mut plugins = match inputs.caller {
		None => builtin,
		Some(PostcssPlugins::List(extra)) => builtin.into_iter().chain(extra).collect(),
		Some(PostcssPlugins::Transform(transform)) => {
			let fallback = builtin.clone();
			match transform.apply(builtin) {
				Value::Null => fallback,
				Value::Array(items) => decode_plugins(items)?,
				other => {
					return Err(ResolveError::InvalidPlugins {
						found: value_kind(&other),
					});
				}
			}
		}
	};

	if let Some(preset) = inputs.minify {
		plugins.push(PostcssPlugin::with_options(
			defaults::CSSNANO,
			object(json!({ "preset": ["default", preset] })),
		));
	}

	Ok(plugins)
}

/// Minifier preset for production builds with compression on.
pub(super) fn minify_preset(cssnano: Option<StepOptions>, source_map: bool) -> StepOptions {
	let mut preset = cssnano.unwrap_or_else(defaults::conservative_cssnano);
	if source_map {
		preset.insert("map".into(), json!({ "inline": false }));
	}
	preset
}

fn autoprefixer(section: Option<AutoprefixerSection>, browsers: Option<Vec<String>>) -> PostcssPlugin {
	let extra = section.and_then(|section| section.options);
	let mut options = merged(object(json!({ "flexbox": "no-2009" })), extra);
	if let Some(browsers) = browsers {
		options.insert("browsers".into(), json!(browsers));
	}
	PostcssPlugin::with_options(defaults::AUTOPREFIXER, options)
}

fn decode_plugins(items: Vec<Value>) -> Result<Vec<PostcssPlugin>, ResolveError> {
	items
		.into_iter()
		.enumerate()
		.map(|(index, item)| {
			serde_json::from_value(item).map_err(|source| ResolveError::InvalidPlugin { index, source })
		})
		.collect()
}

/// Empty, `null`, `false` and zero manifest fields count as undeclared.
fn declares_value(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(text) => !text.is_empty(),
		Value::Array(_) | Value::Object(_) => true,
	}
}

fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "a list",
		Value::Object(_) => "an object",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::options::raw::PluginTransform;
	use crate::probe::StaticProbe;

	fn inputs(caller: Option<PostcssPlugins>) -> PluginInputs {
		PluginInputs {
			caller,
			autoprefixer: None,
			browsers: None,
			minify: None,
		}
	}

	fn names(plugins: &[PostcssPlugin]) -> Vec<&str> {
		plugins.iter().map(|plugin| plugin.name.as_str()).collect()
	}

	#[test]
	fn explicit_browsers_win_over_probes() {
		let probe = StaticProbe::new().with_file(".browserslistrc");
		let explicit = Some(vec!["chrome 100".to_string()]);
		assert_eq!(
			browser_targets(Path::new("."), explicit.clone(), &probe),
			explicit
		);
	}

	#[test]
	fn project_declarations_suppress_default_browsers() {
		let file = StaticProbe::new().with_file("browserslist");
		assert_eq!(browser_targets(Path::new("."), None, &file), None);

		let legacy = StaticProbe::new().with_manifest(json!({ "browserlist": ["defaults"] }));
		assert_eq!(browser_targets(Path::new("."), None, &legacy), None);

		let unrelated = StaticProbe::new().with_manifest(json!({ "name": "app" }));
		assert_eq!(
			browser_targets(Path::new("."), None, &unrelated),
			Some(defaults::default_browsers())
		);
	}

	#[test]
	fn empty_manifest_fields_keep_default_browsers() {
		for field in [json!(null), json!(false), json!(""), json!(0)] {
			let probe = StaticProbe::new().with_manifest(json!({ "browserslist": field }));
			assert_eq!(
				browser_targets(Path::new("."), None, &probe),
				Some(defaults::default_browsers()),
				"{field}"
			);
		}

		let declared = StaticProbe::new().with_manifest(json!({ "browserslist": "defaults" }));
		assert_eq!(browser_targets(Path::new("."), None, &declared), None);
	}

	#[test]
	fn caller_lists_are_appended_after_builtins() {
		let caller = PostcssPlugins::List(vec![PostcssPlugin::new("rucksack-css")]);
		let plugins = synthesize_plugins(inputs(Some(caller))).unwrap();
		assert_eq!(
			names(&plugins),
			vec!["postcss-flexbugs-fixes", "autoprefixer", "rucksack-css"]
		);
		assert_eq!(plugins[1].options["flexbox"], "no-2009");
	}

	#[test]
	fn transforms_can_drop_builtins() {
		let transform = PluginTransform::new(|builtin| {
			let kept: Vec<_> = builtin
				.into_iter()
				.filter(|plugin| plugin.name != "postcss-flexbugs-fixes")
				.collect();
			serde_json::to_value(kept).unwrap()
		});
		let plugins = synthesize_plugins(inputs(Some(PostcssPlugins::Transform(transform)))).unwrap();
		assert_eq!(names(&plugins), vec!["autoprefixer"]);
	}

	#[test]
	fn null_transform_results_keep_builtins() {
		let transform = PluginTransform::new(|_| Value::Null);
		let plugins = synthesize_plugins(inputs(Some(PostcssPlugins::Transform(transform)))).unwrap();
		assert_eq!(names(&plugins), vec!["postcss-flexbugs-fixes", "autoprefixer"]);
	}

	#[test]
	fn non_list_transform_results_are_type_errors() {
		let transform = PluginTransform::new(|_| json!({ "name": "oops" }));
		let err = synthesize_plugins(inputs(Some(PostcssPlugins::Transform(transform)))).unwrap_err();
		assert!(matches!(err, ResolveError::InvalidPlugins { found: "an object" }));

		let transform = PluginTransform::new(|_| json!([42]));
		let err = synthesize_plugins(inputs(Some(PostcssPlugins::Transform(transform)))).unwrap_err();
		assert!(matches!(err, ResolveError::InvalidPlugin { index: 0, .. }));
	}

	#[test]
	fn minify_preset_carries_source_map_flag() {
		let preset = minify_preset(None, true);
		assert_eq!(preset["mergeRules"], false);
		assert_eq!(preset["map"], json!({ "inline": false }));

		let custom = minify_preset(Some(object(json!({ "discardComments": true }))), false);
		assert!(custom.get("mergeRules").is_none());
		assert!(custom.get("map").is_none());

		let plugins = synthesize_plugins(PluginInputs {
			minify: Some(preset),
			..inputs(None)
		})
		.unwrap();
		assert_eq!(plugins[2].name, "cssnano");
		assert_eq!(plugins[2].options["preset"][0], "default");
	}
}
