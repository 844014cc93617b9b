//! Per-dialect rule registration.
//!
//! For each dialect the engine emits, in order:
//!
//! 1. `module.<dialect>`: affix-matching files in module mode (only when affix
//!    mode is on),
//! 2. `<dialect>`: every other in-project file, module mode following the global
//!    flag,
//! 3. `<dialect>-in-node_modules`: dependency files, never in module mode.
//!
//! The plain rule's exclusion predicate hands affix and dependency files to the
//! other two, and the affix rule skips the dependency directory, so at most one of
//! the three matches any path.

use sheet_rules_api::{
	Condition, Dialect, PluginHandle, RuleListError, RuleSpec, RuleTarget, StepDescriptor,
};

use crate::chain::{ChainFlags, append_steps};
use crate::exclusion::{ExclusionPredicate, dependency_directory};
use crate::extract;
use crate::options::ResolvedOptions;

/// Composes style-sheet rules from one set of resolved options.
#[derive(Debug, Clone)]
pub struct RuleEngine {
	options: ResolvedOptions,
}

impl RuleEngine {
	pub fn new(options: ResolvedOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &ResolvedOptions {
		&self.options
	}

	pub fn use_css<T: RuleTarget + ?Sized>(&self, target: &mut T) -> Result<(), RuleListError> {
		self.register(Dialect::Css, target)
	}

	pub fn use_less<T: RuleTarget + ?Sized>(&self, target: &mut T) -> Result<(), RuleListError> {
		self.register(Dialect::Less, target)
	}

	pub fn use_sass<T: RuleTarget + ?Sized>(&self, target: &mut T) -> Result<(), RuleListError> {
		self.register(Dialect::Sass, target)
	}

	pub fn use_stylus<T: RuleTarget + ?Sized>(&self, target: &mut T) -> Result<(), RuleListError> {
		self.register(Dialect::Stylus, target)
	}

	/// Register the sheet-extraction plugin unless server rendering is active.
	pub fn extract_css<T: RuleTarget + ?Sized>(
		&self,
		target: &mut T,
	) -> Result<Option<PluginHandle>, RuleListError> {
		extract::register_extraction_plugin(&self.options, target)
	}

	/// Insert the rules for `dialect` before the target's catch-all rule.
	pub fn register<T: RuleTarget + ?Sized>(
		&self,
		dialect: Dialect,
		target: &mut T,
	) -> Result<(), RuleListError> {
		let rules = self.rules_for(dialect);
		tracing::info!(
			dialect = dialect.id(),
			rules = rules.len(),
			"registering style rules"
		);
		target.insert_before_terminal(rules)
	}

	/// Build the rules for `dialect` without registering them.
	pub fn rules_for(&self, dialect: Dialect) -> Vec<RuleSpec> {
		let options = &self.options;
		let dialect_options = options.dialect(dialect);
		let affix_mode = options.css_modules_by_affix;
		let mut rules = Vec::with_capacity(3);

		if affix_mode {
			rules.push(
				RuleSpec::new(
					affix_rule_name(dialect),
					Condition::pattern(dialect_options.affix.regex().clone()),
				)
				.with_exclude(Condition::pattern(dependency_directory().clone()))
				.with_steps(self.steps(dialect, true)),
			);
		}

		let exclude = ExclusionPredicate::new(dialect_options.affix.regex(), affix_mode, true);
		rules.push(
			RuleSpec::new(
				plain_rule_name(dialect),
				Condition::pattern(dialect_options.test.regex().clone()),
			)
			.with_exclude(exclude.into_condition())
			.with_steps(self.steps(dialect, options.css_modules_global)),
		);

		rules.push(
			RuleSpec::new(
				dependency_rule_name(dialect),
				Condition::pattern(dialect_options.test.regex().clone()),
			)
			.with_include(Condition::pattern(dependency_directory().clone()))
			.with_steps(self.steps(dialect, false)),
		);

		for rule in &rules {
			tracing::debug!(rule = %rule.name, steps = ?rule.step_names(), "built style rule");
		}

		rules
	}

	fn steps(&self, dialect: Dialect, module_mode: bool) -> Vec<StepDescriptor> {
		let flags = ChainFlags {
			module_mode,
			dialect: Some(dialect),
			use_alternate_postprocessor: dialect == Dialect::Stylus
				&& self.options.use_alternate_postprocessor,
		};
		let mut steps = Vec::new();
		append_steps(&mut steps, flags, &self.options);
		steps
	}
}

pub fn affix_rule_name(dialect: Dialect) -> String {
	format!("module.{}", dialect.id())
}

pub fn plain_rule_name(dialect: Dialect) -> String {
	dialect.id().to_string()
}

pub fn dependency_rule_name(dialect: Dialect) -> String {
	format!("{}-in-node_modules", dialect.id())
}
