use std::path::PathBuf;

use serde_json::json;

use super::*;
use crate::probe::StaticProbe;

fn partial(value: serde_json::Value) -> PartialOptions {
	let mut options = PartialOptions::from_json(value).expect("valid options");
	options.cwd.get_or_insert_with(|| PathBuf::from("/project"));
	options
}

fn production(value: serde_json::Value) -> ResolvedOptions {
	resolve(partial(value), BuildEnvironment::production(), &StaticProbe::new()).unwrap()
}

fn development(value: serde_json::Value) -> ResolvedOptions {
	resolve(partial(value), BuildEnvironment::development(), &StaticProbe::new()).unwrap()
}

fn plugin_names(options: &ResolvedOptions) -> Vec<&str> {
	options
		.postcss
		.plugins
		.as_deref()
		.unwrap_or_default()
		.iter()
		.map(|plugin| plugin.name.as_str())
		.collect()
}

#[test]
fn empty_input_uses_builtin_defaults() {
	let options = production(json!({}));

	assert_eq!(options.context_directory, PathBuf::from("/project"));
	assert!(options.filename_hashing_enabled);
	assert!(!options.css_modules_global);
	assert!(options.css_modules_by_affix);
	assert!(options.source_map_enabled);
	assert!(options.compress_enabled);
	assert!(!options.use_alternate_postprocessor);
	assert!(!options.is_server_rendering);
	assert_eq!(options.stylus.test.as_str(), r"\.styl(us)?$");
	assert_eq!(options.stylus.affix.as_str(), r"\.module\.styl(us)?$");
	assert_eq!(options.less.loader, "less-loader");
	assert_eq!(options.less.options["javascriptEnabled"], true);
	assert_eq!(options.sass.options["indentedSyntax"], true);
	assert_eq!(options.postcss.loader, "postcss-loader");
	assert_eq!(options.postcss.ident, "postcss");
}

#[test]
fn module_naming_template_follows_build_mode() {
	assert_eq!(development(json!({})).local_ident_name, defaults::DEV_LOCAL_IDENT_NAME);
	assert_eq!(production(json!({})).local_ident_name, defaults::PROD_LOCAL_IDENT_NAME);

	let custom = production(json!({ "css": { "options": { "localIdentName": "[hash:8]" } } }));
	assert_eq!(custom.local_ident_name, "[hash:8]");
	assert!(custom.css.options.get("localIdentName").is_none());
}

#[test]
fn css_options_merge_over_the_sheet_loading_base() {
	let options = production(json!({
		"sourceMap": false,
		"css": { "options": { "importLoaders": 1, "url": false } }
	}));

	assert_eq!(options.css.options["importLoaders"], 1);
	assert_eq!(options.css.options["sourceMap"], false);
	assert_eq!(options.css.options["url"], false);
}

#[test]
fn dialect_options_merge_key_wise_over_defaults() {
	let options = production(json!({
		"less": { "options": { "modifyVars": { "primary": "#1890ff" } } },
		"stylus": { "loader": "custom-stylus-loader", "test": "\\.styl$" }
	}));

	assert_eq!(options.less.options["javascriptEnabled"], true);
	assert_eq!(options.less.options["modifyVars"]["primary"], "#1890ff");
	assert_eq!(options.stylus.loader, "custom-stylus-loader");
	assert_eq!(options.stylus.test.as_str(), r"\.styl$");
	assert_eq!(options.stylus.affix.as_str(), r"\.module\.styl(us)?$");
}

#[test]
fn default_browsers_are_injected_when_the_project_declares_none() {
	let options = production(json!({}));
	assert_eq!(options.browsers, Some(defaults::default_browsers()));

	let plugins = options.postcss.plugins.as_ref().unwrap();
	assert_eq!(plugins[1].name, "autoprefixer");
	assert_eq!(plugins[1].options["browsers"], json!(defaults::DEFAULT_BROWSERS));
}

#[test]
fn manifest_browserslist_suppresses_default_browsers() {
	let probe = StaticProbe::new().with_manifest(json!({ "browserslist": ["defaults"] }));
	let options = resolve(partial(json!({})), BuildEnvironment::production(), &probe).unwrap();

	assert_eq!(options.browsers, None);
	let plugins = options.postcss.plugins.as_ref().unwrap();
	assert!(plugins[1].options.get("browsers").is_none());
}

#[test]
fn minifier_is_only_added_for_compressed_production_builds() {
	assert_eq!(
		plugin_names(&production(json!({}))),
		vec!["postcss-flexbugs-fixes", "autoprefixer", "cssnano"]
	);
	assert_eq!(
		plugin_names(&development(json!({}))),
		vec!["postcss-flexbugs-fixes", "autoprefixer"]
	);
	assert_eq!(
		plugin_names(&production(json!({ "compress": false }))),
		vec!["postcss-flexbugs-fixes", "autoprefixer"]
	);
}

#[test]
fn minifier_respects_caller_preset_and_source_maps() {
	let options = production(json!({ "sourceMap": false, "cssnano": { "zindex": false } }));
	let plugins = options.postcss.plugins.as_ref().unwrap();
	let preset = &plugins[2].options["preset"][1];

	assert_eq!(preset["zindex"], false);
	assert!(preset.get("mergeRules").is_none());
	assert!(preset.get("map").is_none());
}

#[test]
fn external_postcss_config_keeps_caller_options() {
	let probe = StaticProbe::new().with_file("postcss.config.js");
	let input = partial(json!({ "postcss": { "options": { "syntax": "sugarss" } } }));
	let options = resolve(input, BuildEnvironment::production(), &probe).unwrap();

	assert!(options.postcss.plugins.is_none());
	assert_eq!(options.postcss.options["syntax"], "sugarss");
}

#[test]
fn caller_plugins_are_appended() {
	let options = development(json!({
		"postcss": { "plugins": [{ "name": "rucksack-css" }] }
	}));
	assert_eq!(
		plugin_names(&options),
		vec!["postcss-flexbugs-fixes", "autoprefixer", "rucksack-css"]
	);
}

#[test]
fn plugin_transform_returning_a_non_list_aborts_resolution() {
	let mut input = partial(json!({}));
	input.postcss = Some(PostcssSection {
		plugins: Some(PostcssPlugins::Transform(PluginTransform::new(|_| json!("nope")))),
		..PostcssSection::default()
	});

	let err = resolve(input, BuildEnvironment::production(), &StaticProbe::new()).unwrap_err();
	assert!(matches!(err, ResolveError::InvalidPlugins { found: "a string" }));
	assert!(err.to_string().contains("invalid plugins for postcss"));
}

#[test]
fn declared_sass_capabilities_are_injected_unless_overridden() {
	let options = production(json!({
		"capabilities": { "sass_implementation": "sass", "sass_fiber": "fibers" }
	}));
	assert_eq!(options.sass.options["implementation"], "sass");
	assert_eq!(options.sass.options["fiber"], "fibers");

	let options = production(json!({
		"sass": { "options": { "implementation": "node-sass" } },
		"capabilities": { "sass_implementation": "sass" }
	}));
	assert_eq!(options.sass.options["implementation"], "node-sass");
	assert!(options.sass.options.get("fiber").is_none());
}

#[test]
fn unknown_keys_are_rejected() {
	let err = PartialOptions::from_json(json!({ "module": true })).unwrap_err();
	assert!(matches!(err, ResolveError::Parse(_)));

	let err = PartialOptions::from_json(json!({ "less": { "tset": "x" } })).unwrap_err();
	assert!(err.to_string().contains("tset"));
}

#[test]
fn invalid_patterns_name_their_key() {
	let input = partial(json!({ "less": { "test": "(" } }));
	let err = resolve(input, BuildEnvironment::production(), &StaticProbe::new()).unwrap_err();
	match err {
		ResolveError::InvalidPattern { key, pattern, .. } => {
			assert_eq!(key, "less.test");
			assert_eq!(pattern, "(");
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn resolution_is_deterministic() {
	let input = json!({
		"modules": true,
		"usePoststylus": true,
		"stylus": { "options": { "use": ["poststylus"] } },
		"postcss": { "plugins": [{ "name": "rucksack-css" }] }
	});
	assert_eq!(production(input.clone()), production(input));
}

#[test]
fn merge_layers_partials_field_by_field() {
	let mut base = partial(json!({
		"modules": true,
		"less": { "options": { "javascriptEnabled": false, "math": "always" } },
		"autoprefixer": { "browsers": ["a", "b"] }
	}));
	base.merge(partial(json!({
		"compress": false,
		"less": { "options": { "javascriptEnabled": true } },
		"autoprefixer": { "browsers": ["c"] }
	})));

	assert_eq!(base.modules, Some(true));
	assert_eq!(base.compress, Some(false));
	let less = base.less.as_ref().unwrap().options.as_ref().unwrap();
	assert_eq!(less["javascriptEnabled"], true);
	assert_eq!(less["math"], "always");
	assert_eq!(
		base.autoprefixer.unwrap().browsers,
		Some(vec!["c".to_string()])
	);
}
