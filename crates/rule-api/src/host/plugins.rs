use serde::Serialize;

use crate::error::RuleListError;

/// A plugin the host should instantiate, with its output filename templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginDeclaration {
	/// Identifier of the declaration inside the host's plugin list.
	pub name: String,
	/// Resource identifier of the plugin implementation.
	pub plugin: String,
	pub filename: String,
	pub chunk_filename: String,
}

/// Opaque reference to a declaration stored in a [`PluginList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PluginHandle(usize);

impl PluginHandle {
	pub fn index(self) -> usize {
		self.0
	}
}

/// Ordered plugin declarations of a host configuration.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PluginList {
	declarations: Vec<PluginDeclaration>,
}

impl PluginList {
	/// Append a declaration; names must be unique.
	pub fn add(&mut self, declaration: PluginDeclaration) -> Result<PluginHandle, RuleListError> {
		if self.contains(&declaration.name) {
			return Err(RuleListError::DuplicatePlugin {
				name: declaration.name,
			});
		}
		self.declarations.push(declaration);
		Ok(PluginHandle(self.declarations.len() - 1))
	}

	pub fn get(&self, handle: PluginHandle) -> Option<&PluginDeclaration> {
		self.declarations.get(handle.0)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.declarations.iter().any(|decl| decl.name == name)
	}

	pub fn iter(&self) -> impl Iterator<Item = &PluginDeclaration> {
		self.declarations.iter()
	}

	pub fn len(&self) -> usize {
		self.declarations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.declarations.is_empty()
	}
}
