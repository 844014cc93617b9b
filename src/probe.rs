//! Read-only project probes consulted while resolving options.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

const MANIFEST: &str = "package.json";

/// Existence and manifest lookups against the project directory.
pub trait ProjectProbe {
	/// Return the first of `candidates` that exists under `dir`.
	fn find_existing(&self, dir: &Path, candidates: &[&str]) -> Option<String>;

	/// Return the parsed project manifest, or `None` on any read or parse failure.
	fn read_manifest(&self, dir: &Path) -> Option<Value>;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl ProjectProbe for FsProbe {
	fn find_existing(&self, dir: &Path, candidates: &[&str]) -> Option<String> {
		candidates
			.iter()
			.find(|name| dir.join(name).exists())
			.map(|name| name.to_string())
	}

	fn read_manifest(&self, dir: &Path) -> Option<Value> {
		let path = dir.join(MANIFEST);
		let contents = match fs::read_to_string(&path) {
			Ok(contents) => contents,
			Err(err) if err.kind() == ErrorKind::NotFound => {
				tracing::debug!(path = %path.display(), "no project manifest");
				return None;
			}
			Err(err) => {
				tracing::warn!(path = %path.display(), error = %err, "failed to read project manifest");
				return None;
			}
		};
		match serde_json::from_str(&contents) {
			Ok(value) => Some(value),
			Err(err) => {
				tracing::warn!(path = %path.display(), error = %err, "failed to parse project manifest");
				None
			}
		}
	}
}

/// Probe answering from a fixed set of file names, ignoring the directory.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
	files: BTreeSet<String>,
	manifest: Option<Value>,
}

impl StaticProbe {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_file(mut self, name: impl Into<String>) -> Self {
		self.files.insert(name.into());
		self
	}

	pub fn with_manifest(mut self, manifest: Value) -> Self {
		self.manifest = Some(manifest);
		self
	}
}

impl ProjectProbe for StaticProbe {
	fn find_existing(&self, _dir: &Path, candidates: &[&str]) -> Option<String> {
		candidates
			.iter()
			.find(|name| self.files.contains(**name))
			.map(|name| name.to_string())
	}

	fn read_manifest(&self, _dir: &Path) -> Option<Value> {
		self.manifest.clone()
	}
}
