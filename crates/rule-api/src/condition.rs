use std::fmt;
use std::sync::Arc;

use regex::Regex;
use serde::{Serialize, Serializer};

type PathPredicate = dyn Fn(&str) -> bool + Send + Sync;

/// File matcher attached to a rule's `test`, `include` or `exclude` slot.
#[derive(Clone)]
pub enum Condition {
	/// Match the path against a regular expression.
	Pattern(Regex),
	/// Evaluate a named pure predicate against the path.
	Predicate {
		name: &'static str,
		predicate: Arc<PathPredicate>,
	},
}

impl Condition {
	pub fn pattern(regex: Regex) -> Self {
		Self::Pattern(regex)
	}

	pub fn predicate<F>(name: &'static str, predicate: F) -> Self
	where
		F: Fn(&str) -> bool + Send + Sync + 'static,
	{
		Self::Predicate {
			name,
			predicate: Arc::new(predicate),
		}
	}

	/// Returns `true` when `path` satisfies this condition.
	pub fn matches(&self, path: &str) -> bool {
		match self {
			Self::Pattern(regex) => regex.is_match(path),
			Self::Predicate { predicate, .. } => predicate(path),
		}
	}

	/// Human readable form used by summaries and serialization.
	pub fn describe(&self) -> String {
		match self {
			Self::Pattern(regex) => format!("/{}/", regex.as_str()),
			Self::Predicate { name, .. } => format!("[predicate {name}]"),
		}
	}
}

impl fmt::Debug for Condition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
			Self::Predicate { name, .. } => f
				.debug_struct("Predicate")
				.field("name", name)
				.field("predicate", &"<function>")
				.finish(),
		}
	}
}

impl fmt::Display for Condition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.describe())
	}
}

impl Serialize for Condition {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.describe())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pattern_conditions_delegate_to_the_regex() {
		let condition = Condition::pattern(Regex::new(r"\.less$").unwrap());
		assert!(condition.matches("src/app.less"));
		assert!(!condition.matches("src/app.css"));
		assert_eq!(condition.describe(), r"/\.less$/");
	}

	#[test]
	fn predicate_conditions_report_their_name() {
		let condition = Condition::predicate("short", |path| path.len() < 4);
		assert!(condition.matches("a.x"));
		assert!(!condition.matches("long.css"));
		assert_eq!(condition.to_string(), "[predicate short]");
		assert_eq!(serde_json::to_value(&condition).unwrap(), "[predicate short]");
	}
}
