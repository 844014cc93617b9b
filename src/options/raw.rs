use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use sheet_rules_api::StepOptions;

use super::error::ResolveError;
use super::merge::merge_options;

/// Caller-supplied options before defaults are applied.
///
/// Every field is optional; unknown keys are rejected when deserializing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialOptions {
	pub cwd: Option<PathBuf>,
	#[serde(alias = "filenameHashing")]
	pub filename_hashing: Option<bool>,
	pub modules: Option<bool>,
	#[serde(alias = "modulesWithAffix")]
	pub modules_with_affix: Option<bool>,
	#[serde(alias = "sourceMap")]
	pub source_map: Option<bool>,
	pub compress: Option<bool>,
	#[serde(alias = "usePoststylus")]
	pub use_poststylus: Option<bool>,
	pub ssr: Option<bool>,
	#[serde(alias = "cssPublicPath")]
	pub css_public_path: Option<String>,
	pub css: Option<DialectSection>,
	pub less: Option<DialectSection>,
	pub sass: Option<DialectSection>,
	pub stylus: Option<DialectSection>,
	pub postcss: Option<PostcssSection>,
	pub autoprefixer: Option<AutoprefixerSection>,
	pub cssnano: Option<StepOptions>,
	pub capabilities: Option<CapabilitiesSection>,
}

/// Per-dialect overrides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialectSection {
	/// General file pattern.
	pub test: Option<String>,
	/// Affix pattern selecting module-only files.
	pub modules: Option<String>,
	pub loader: Option<String>,
	pub options: Option<StepOptions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostcssSection {
	pub test: Option<String>,
	pub loader: Option<String>,
	pub ident: Option<String>,
	pub options: Option<StepOptions>,
	pub plugins: Option<PostcssPlugins>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AutoprefixerSection {
	pub browsers: Option<Vec<String>>,
	/// Extra autoprefixer options, merged over `{ flexbox: "no-2009" }`.
	pub options: Option<StepOptions>,
}

/// Statically declared transformation capabilities.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CapabilitiesSection {
	/// Sass implementation injected as the Sass step's `implementation` option.
	pub sass_implementation: Option<String>,
	/// Fiber implementation injected as the Sass step's `fiber` option.
	pub sass_fiber: Option<String>,
}

/// A postprocessor plugin: an opaque name plus its options payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostcssPlugin {
	pub name: String,
	#[serde(default, skip_serializing_if = "StepOptions::is_empty")]
	pub options: StepOptions,
}

impl PostcssPlugin {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			options: StepOptions::new(),
		}
	}

	pub fn with_options(name: impl Into<String>, options: StepOptions) -> Self {
		Self {
			name: name.into(),
			options,
		}
	}
}

type TransformFn = dyn Fn(Vec<PostcssPlugin>) -> Value + Send + Sync;

/// Caller hook that receives the built-in plugin list and returns the list to use.
///
/// Returning `null` keeps the built-in list; any other non-array value is rejected.
#[derive(Clone)]
pub struct PluginTransform(Arc<TransformFn>);

impl PluginTransform {
	pub fn new<F>(transform: F) -> Self
	where
		F: Fn(Vec<PostcssPlugin>) -> Value + Send + Sync + 'static,
	{
		Self(Arc::new(transform))
	}

	pub(super) fn apply(&self, builtin: Vec<PostcssPlugin>) -> Value {
		(self.0)(builtin)
	}
}

impl fmt::Debug for PluginTransform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("PluginTransform(<function>)")
	}
}

/// Caller plugins: appended to the built-in list, or a transform over it.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "Vec<PostcssPlugin>")]
pub enum PostcssPlugins {
	List(Vec<PostcssPlugin>),
	Transform(PluginTransform),
}

impl From<Vec<PostcssPlugin>> for PostcssPlugins {
	fn from(plugins: Vec<PostcssPlugin>) -> Self {
		Self::List(plugins)
	}
}

impl PartialOptions {
	/// Decode options from a JSON value, rejecting unknown keys.
	pub fn from_json(value: Value) -> Result<Self, ResolveError> {
		serde_json::from_value(value).map_err(ResolveError::from)
	}

	/// Merge `overlay` over `self` field by field.
	///
	/// Leaf values present in `overlay` win, option payloads merge key-wise, and
	/// lists replace wholesale.
	pub fn merge(&mut self, overlay: PartialOptions) {
		overlay_value(&mut self.cwd, overlay.cwd);
		overlay_value(&mut self.filename_hashing, overlay.filename_hashing);
		overlay_value(&mut self.modules, overlay.modules);
		overlay_value(&mut self.modules_with_affix, overlay.modules_with_affix);
		overlay_value(&mut self.source_map, overlay.source_map);
		overlay_value(&mut self.compress, overlay.compress);
		overlay_value(&mut self.use_poststylus, overlay.use_poststylus);
		overlay_value(&mut self.ssr, overlay.ssr);
		overlay_value(&mut self.css_public_path, overlay.css_public_path);
		merge_section(&mut self.css, overlay.css, DialectSection::merge);
		merge_section(&mut self.less, overlay.less, DialectSection::merge);
		merge_section(&mut self.sass, overlay.sass, DialectSection::merge);
		merge_section(&mut self.stylus, overlay.stylus, DialectSection::merge);
		merge_section(&mut self.postcss, overlay.postcss, PostcssSection::merge);
		merge_section(
			&mut self.autoprefixer,
			overlay.autoprefixer,
			AutoprefixerSection::merge,
		);
		merge_section(&mut self.cssnano, overlay.cssnano, merge_options);
		merge_section(
			&mut self.capabilities,
			overlay.capabilities,
			CapabilitiesSection::merge,
		);
	}
}

impl DialectSection {
	pub fn merge(&mut self, overlay: DialectSection) {
		overlay_value(&mut self.test, overlay.test);
		overlay_value(&mut self.modules, overlay.modules);
		overlay_value(&mut self.loader, overlay.loader);
		merge_section(&mut self.options, overlay.options, merge_options);
	}
}

impl PostcssSection {
	pub fn merge(&mut self, overlay: PostcssSection) {
		overlay_value(&mut self.test, overlay.test);
		overlay_value(&mut self.loader, overlay.loader);
		overlay_value(&mut self.ident, overlay.ident);
		merge_section(&mut self.options, overlay.options, merge_options);
		overlay_value(&mut self.plugins, overlay.plugins);
	}
}

impl AutoprefixerSection {
	pub fn merge(&mut self, overlay: AutoprefixerSection) {
		overlay_value(&mut self.browsers, overlay.browsers);
		merge_section(&mut self.options, overlay.options, merge_options);
	}
}

impl CapabilitiesSection {
	pub fn merge(&mut self, overlay: CapabilitiesSection) {
		overlay_value(&mut self.sass_implementation, overlay.sass_implementation);
		overlay_value(&mut self.sass_fiber, overlay.sass_fiber);
	}
}

fn overlay_value<T>(target: &mut Option<T>, overlay: Option<T>) {
	if overlay.is_some() {
		*target = overlay;
	}
}

fn merge_section<T>(target: &mut Option<T>, overlay: Option<T>, merge: fn(&mut T, T)) {
	match (target.as_mut(), overlay) {
		(Some(current), Some(next)) => merge(current, next),
		(None, Some(next)) => *target = Some(next),
		(_, None) => {}
	}
}
