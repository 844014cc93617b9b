use thiserror::Error;

/// Errors that can occur when mutating a host [`ModuleRules`](crate::ModuleRules) list
/// or its [`PluginList`](crate::PluginList).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleListError {
	/// The rule list has no `oneOf` entry to insert into.
	#[error("host rule list has no mutually-exclusive dispatch set (oneOf)")]
	MissingDispatchSet,

	/// The dispatch set is empty, so there is no catch-all rule to insert before.
	#[error("dispatch set has no terminal catch-all rule")]
	MissingTerminal,

	/// A rule attempted to register a name that already exists in the rule list.
	#[error("rule '{name}' is already registered")]
	DuplicateRule { name: String },

	/// A plugin attempted to register a name that already exists in the plugin list.
	#[error("plugin '{name}' is already registered")]
	DuplicatePlugin { name: String },
}

impl RuleListError {
	pub fn duplicate_rule(name: impl Into<String>) -> Self {
		Self::DuplicateRule { name: name.into() }
	}
}
