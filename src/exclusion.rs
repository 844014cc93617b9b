//! Routing predicate shared by every dialect's plain rule.

use std::sync::LazyLock;

use regex::Regex;

use sheet_rules_api::Condition;

/// Name the predicate carries once attached to a rule.
pub const EXCLUDE_PREDICATE: &str = "css-exclude";

static DEPENDENCY_DIRECTORY: LazyLock<Regex> =
	LazyLock::new(|| Regex::new("node_modules").expect("static pattern compiles"));

/// Matches paths inside the dependency directory.
pub fn dependency_directory() -> &'static Regex {
	&DEPENDENCY_DIRECTORY
}

/// Decides whether a path is handed off from the plain rule to a more specific one.
#[derive(Debug, Clone)]
pub struct ExclusionPredicate {
	affix: Option<Regex>,
	exclude_dependencies: bool,
}

impl ExclusionPredicate {
	/// The affix pattern only participates when `affix_mode` is active.
	pub fn new(affix: &Regex, affix_mode: bool, exclude_dependencies: bool) -> Self {
		Self {
			affix: affix_mode.then(|| affix.clone()),
			exclude_dependencies,
		}
	}

	pub fn matches(&self, path: &str) -> bool {
		if self.exclude_dependencies && dependency_directory().is_match(path) {
			return true;
		}
		self.affix
			.as_ref()
			.is_some_and(|affix| affix.is_match(path))
	}

	pub fn into_condition(self) -> Condition {
		Condition::predicate(EXCLUDE_PREDICATE, move |path| self.matches(path))
	}
}
