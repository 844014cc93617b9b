//! Step chain construction for a single rule.
//!
//! A chain is always a subsequence of
//! `[extraction, sheet-loading, postprocessing, dialect-transform]`.

use serde_json::Value;

use sheet_rules_api::{Dialect, StepDescriptor, StepOptions};

use crate::options::{PostcssPlugin, ResolvedOptions};

pub const EXTRACT_STEP: &str = "extract-css-loader";
pub const EXTRACT_LOADER: &str = "mini-css-extract-plugin/loader";
pub const SHEET_STEP: &str = "css-loader";
pub const POSTCSS_STEP: &str = "postcss-loader";

const MODULE_KEYS: [&str; 2] = ["modules", "localIdentName"];

/// Per-invocation switches for [`append_steps`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainFlags {
	pub module_mode: bool,
	/// Dialect whose transformation step ends the chain; CSS contributes none.
	pub dialect: Option<Dialect>,
	/// Skip the postprocessing step; the dialect's own step takes over its work.
	pub use_alternate_postprocessor: bool,
}

/// Append the steps selected by `flags` to `target`.
///
/// Calls are additive: invoking this twice on the same collection duplicates the
/// chain, so every rule needs a fresh collection.
pub fn append_steps(target: &mut Vec<StepDescriptor>, flags: ChainFlags, options: &ResolvedOptions) {
	if !options.is_server_rendering {
		target.push(extraction_step(options));
	}

	target.push(sheet_loading_step(flags.module_mode, options));

	if !flags.use_alternate_postprocessor {
		target.push(postprocessing_step(options));
	}

	if let Some(dialect) = flags.dialect.filter(|dialect| dialect.has_transform()) {
		let dialect_options = options.dialect(dialect);
		target.push(StepDescriptor::new(
			transform_step_name(dialect),
			dialect_options.loader.clone(),
			dialect_options.options.clone(),
		));
	}
}

/// Build a chain into a fresh collection.
pub fn step_chain(flags: ChainFlags, options: &ResolvedOptions) -> Vec<StepDescriptor> {
	let mut steps = Vec::with_capacity(4);
	append_steps(&mut steps, flags, options);
	steps
}

/// Logical name of a dialect's transformation step, e.g. `less-loader`.
pub fn transform_step_name(dialect: Dialect) -> String {
	format!("{}-loader", dialect.id())
}

fn extraction_step(options: &ResolvedOptions) -> StepDescriptor {
	let mut step_options = StepOptions::new();
	if let Some(public_path) = &options.css_public_path {
		step_options.insert("publicPath".into(), Value::from(public_path.as_str()));
	}
	step_options.insert("hmr".into(), Value::from(options.is_development));
	StepDescriptor::new(EXTRACT_STEP, EXTRACT_LOADER, step_options)
}

fn sheet_loading_step(module_mode: bool, options: &ResolvedOptions) -> StepDescriptor {
	let mut step_options = options.css.options.clone();
	if module_mode {
		step_options.insert("modules".into(), Value::Bool(true));
		step_options.insert(
			"localIdentName".into(),
			Value::from(options.local_ident_name.as_str()),
		);
	} else {
		for key in MODULE_KEYS {
			step_options.remove(key);
		}
	}
	StepDescriptor::new(SHEET_STEP, options.css.loader.clone(), step_options)
}

fn postprocessing_step(options: &ResolvedOptions) -> StepDescriptor {
	let postcss = &options.postcss;
	let mut step_options = postcss.options.clone();
	if let Some(plugins) = &postcss.plugins {
		step_options.insert("ident".into(), Value::from(postcss.ident.as_str()));
		step_options.insert(
			"plugins".into(),
			Value::Array(plugins.iter().map(plugin_value).collect()),
		);
	}
	StepDescriptor::new(POSTCSS_STEP, postcss.loader.clone(), step_options)
}

/// `{ name, options }`, with `options` omitted when empty.
fn plugin_value(plugin: &PostcssPlugin) -> Value {
	let mut entry = StepOptions::new();
	entry.insert("name".into(), Value::from(plugin.name.as_str()));
	if !plugin.options.is_empty() {
		entry.insert("options".into(), Value::Object(plugin.options.clone()));
	}
	Value::Object(entry)
}
