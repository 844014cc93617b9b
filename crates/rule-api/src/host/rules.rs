use std::collections::HashSet;

use serde::Serialize;

use crate::error::RuleListError;
use crate::rule::RuleSpec;

/// One entry of the host's top-level rule list.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RuleEntry {
	Rule(RuleSpec),
	/// A mutually-exclusive dispatch set: the first matching rule wins, and the last
	/// rule is the catch-all.
	OneOf {
		#[serde(rename = "oneOf")]
		one_of: Vec<RuleSpec>,
	},
}

impl RuleEntry {
	pub fn one_of(rules: Vec<RuleSpec>) -> Self {
		Self::OneOf { one_of: rules }
	}

	fn rules(&self) -> &[RuleSpec] {
		match self {
			Self::Rule(rule) => std::slice::from_ref(rule),
			Self::OneOf { one_of } => one_of,
		}
	}
}

/// The host pipeline's ordered module rule list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModuleRules {
	rules: Vec<RuleEntry>,
}

impl ModuleRules {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, entry: RuleEntry) {
		self.rules.push(entry);
	}

	pub fn entries(&self) -> &[RuleEntry] {
		&self.rules
	}

	/// Locate the first dispatch set, the anchor for rule insertion.
	pub fn find_dispatch_set(&self) -> Option<&[RuleSpec]> {
		self.rules.iter().find_map(|entry| match entry {
			RuleEntry::OneOf { one_of } => Some(one_of.as_slice()),
			RuleEntry::Rule(_) => None,
		})
	}

	fn find_dispatch_set_mut(&mut self) -> Option<&mut Vec<RuleSpec>> {
		self.rules.iter_mut().find_map(|entry| match entry {
			RuleEntry::OneOf { one_of } => Some(one_of),
			RuleEntry::Rule(_) => None,
		})
	}

	/// Iterate over every rule, flattening dispatch sets.
	pub fn iter(&self) -> impl Iterator<Item = &RuleSpec> {
		self.rules.iter().flat_map(RuleEntry::rules)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.iter().any(|rule| rule.name == name)
	}

	pub fn rule(&self, name: &str) -> Option<&RuleSpec> {
		self.iter().find(|rule| rule.name == name)
	}

	/// Splice `rules` immediately before the catch-all of the dispatch set.
	///
	/// The whole batch is rejected when any name is already present, so a failed
	/// call leaves the list untouched.
	pub fn insert_before_terminal(&mut self, rules: Vec<RuleSpec>) -> Result<(), RuleListError> {
		let mut incoming = HashSet::new();
		for rule in &rules {
			if self.contains(&rule.name) || !incoming.insert(rule.name.as_str()) {
				return Err(RuleListError::duplicate_rule(rule.name.clone()));
			}
		}

		let dispatch = self
			.find_dispatch_set_mut()
			.ok_or(RuleListError::MissingDispatchSet)?;
		if dispatch.is_empty() {
			return Err(RuleListError::MissingTerminal);
		}
		let terminal = dispatch.len() - 1;
		dispatch.splice(terminal..terminal, rules);
		Ok(())
	}

	/// Return the rule of the dispatch set that would handle `path`.
	pub fn route(&self, path: &str) -> Option<&RuleSpec> {
		self.find_dispatch_set()?
			.iter()
			.find(|rule| rule.matches(path))
	}
}
