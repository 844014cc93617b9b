use std::io;

use thiserror::Error;

/// Fatal errors raised while resolving options; any of them aborts the pass.
#[derive(Debug, Error)]
pub enum ResolveError {
	/// The input did not match the option schema (unknown key, wrong type).
	#[error("failed to parse options: {0}")]
	Parse(#[from] serde_json::Error),

	/// A caller plugin transform returned something other than a list.
	#[error("invalid plugins for postcss: transform returned {found}, expected a list")]
	InvalidPlugins { found: &'static str },

	/// An element of the transformed plugin list is not a `{ name, options }` object.
	#[error("invalid postcss plugin at index {index}: {source}")]
	InvalidPlugin {
		index: usize,
		#[source]
		source: serde_json::Error,
	},

	#[error("invalid pattern for {key} ({pattern}): {source}")]
	InvalidPattern {
		key: String,
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("failed to determine the working directory: {0}")]
	WorkingDirectory(#[source] io::Error),
}
