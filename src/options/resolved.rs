use std::path::PathBuf;

use regex::Regex;

use sheet_rules_api::{Dialect, StepOptions};

use super::error::ResolveError;
use super::raw::PostcssPlugin;

/// A compiled file pattern; two patterns are equal when their sources are.
#[derive(Debug, Clone)]
pub struct FilePattern(Regex);

impl FilePattern {
	pub(super) fn compile(key: String, pattern: &str) -> Result<Self, ResolveError> {
		Regex::new(pattern)
			.map(Self)
			.map_err(|source| ResolveError::InvalidPattern {
				key,
				pattern: pattern.to_string(),
				source,
			})
	}

	pub fn regex(&self) -> &Regex {
		&self.0
	}

	pub fn as_str(&self) -> &str {
		self.0.as_str()
	}
}

impl PartialEq for FilePattern {
	fn eq(&self, other: &Self) -> bool {
		self.as_str() == other.as_str()
	}
}

/// Resolved settings for one dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct DialectOptions {
	pub test: FilePattern,
	pub affix: FilePattern,
	pub loader: String,
	pub options: StepOptions,
}

/// Resolved settings for the postprocessing step.
#[derive(Debug, Clone, PartialEq)]
pub struct PostcssOptions {
	/// Accepted and validated for configuration compatibility; no rule routes on it.
	pub test: FilePattern,
	pub loader: String,
	pub ident: String,
	pub options: StepOptions,
	/// Synthesized plugin list; `None` when an external postprocessor config exists.
	pub plugins: Option<Vec<PostcssPlugin>>,
}

/// Immutable option record owned by a rule engine for one configuration pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
	pub context_directory: PathBuf,
	pub filename_hashing_enabled: bool,
	pub css_modules_global: bool,
	pub css_modules_by_affix: bool,
	pub source_map_enabled: bool,
	pub compress_enabled: bool,
	pub use_alternate_postprocessor: bool,
	pub is_development: bool,
	pub is_server_rendering: bool,
	pub css_public_path: Option<String>,
	/// Naming template applied to module-mode sheet-loading steps.
	pub local_ident_name: String,
	/// Browser targets handed to autoprefixer; `None` when the project declares its own.
	pub browsers: Option<Vec<String>>,
	pub css: DialectOptions,
	pub less: DialectOptions,
	pub sass: DialectOptions,
	pub stylus: DialectOptions,
	pub postcss: PostcssOptions,
}

impl ResolvedOptions {
	pub fn dialect(&self, dialect: Dialect) -> &DialectOptions {
		match dialect {
			Dialect::Css => &self.css,
			Dialect::Less => &self.less,
			Dialect::Sass => &self.sass,
			Dialect::Stylus => &self.stylus,
		}
	}
}
