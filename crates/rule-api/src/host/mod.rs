//! The host pipeline's configuration tree as seen by the rule engine.
//!
//! The engine only ever needs two operations from the host: splice rules in front
//! of the catch-all entry of the dispatch set, and append a plugin declaration.
//! [`RuleTarget`] captures that contract; [`HostConfig`] is the in-memory
//! implementation used by the binary and the tests.

mod plugins;
mod rules;

use serde::Serialize;

pub use plugins::{PluginDeclaration, PluginHandle, PluginList};
pub use rules::{ModuleRules, RuleEntry};

use crate::error::RuleListError;
use crate::rule::RuleSpec;

/// Mutation surface the rule engine requires from a host configuration.
pub trait RuleTarget {
	/// Insert `rules`, in order, immediately before the terminal catch-all rule of
	/// the host's dispatch set.
	fn insert_before_terminal(&mut self, rules: Vec<RuleSpec>) -> Result<(), RuleListError>;

	/// Append a plugin declaration and return a handle to it.
	fn add_plugin(&mut self, declaration: PluginDeclaration)
	-> Result<PluginHandle, RuleListError>;
}

/// In-memory host configuration: module rules plus plugin declarations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HostConfig {
	pub module: ModuleRules,
	pub plugins: PluginList,
}

impl HostConfig {
	/// Create a configuration whose only entry is a dispatch set holding `catch_all`.
	pub fn with_catch_all(catch_all: RuleSpec) -> Self {
		let mut module = ModuleRules::new();
		module.push(RuleEntry::one_of(vec![catch_all]));
		Self {
			module,
			plugins: PluginList::default(),
		}
	}
}

impl RuleTarget for HostConfig {
	fn insert_before_terminal(&mut self, rules: Vec<RuleSpec>) -> Result<(), RuleListError> {
		self.module.insert_before_terminal(rules)
	}

	fn add_plugin(
		&mut self,
		declaration: PluginDeclaration,
	) -> Result<PluginHandle, RuleListError> {
		self.plugins.add(declaration)
	}
}
