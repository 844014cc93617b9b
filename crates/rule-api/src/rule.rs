use serde::Serialize;

use crate::condition::Condition;
use crate::step::StepDescriptor;

/// A file-routing rule as handed to the host's module rule list.
///
/// Rules are assembled by value and never mutated once they have been inserted.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSpec {
	pub name: String,
	pub test: Condition,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub include: Option<Condition>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub exclude: Option<Condition>,
	#[serde(rename = "use")]
	pub steps: Vec<StepDescriptor>,
}

impl RuleSpec {
	pub fn new(name: impl Into<String>, test: Condition) -> Self {
		Self {
			name: name.into(),
			test,
			include: None,
			exclude: None,
			steps: Vec::new(),
		}
	}

	pub fn with_include(self, include: Condition) -> Self {
		Self {
			include: Some(include),
			..self
		}
	}

	pub fn with_exclude(self, exclude: Condition) -> Self {
		Self {
			exclude: Some(exclude),
			..self
		}
	}

	pub fn with_steps(self, steps: Vec<StepDescriptor>) -> Self {
		Self { steps, ..self }
	}

	/// Returns `true` when the rule's `test` and `include` accept `path` and its
	/// `exclude` does not.
	pub fn matches(&self, path: &str) -> bool {
		if !self.test.matches(path) {
			return false;
		}
		if let Some(include) = &self.include
			&& !include.matches(path)
		{
			return false;
		}
		match &self.exclude {
			Some(exclude) => !exclude.matches(path),
			None => true,
		}
	}

	/// Names of the steps in chain order.
	pub fn step_names(&self) -> Vec<&str> {
		self.steps.iter().map(|step| step.name.as_str()).collect()
	}

	/// Lookup a step in this rule's chain by name.
	pub fn step(&self, name: &str) -> Option<&StepDescriptor> {
		self.steps.iter().find(|step| step.name == name)
	}
}

#[cfg(test)]
mod tests {
	use regex::Regex;

	use super::*;

	fn less_rule() -> RuleSpec {
		RuleSpec::new("less", Condition::pattern(Regex::new(r"\.less$").unwrap()))
	}

	#[test]
	fn exclude_overrides_test() {
		let rule = less_rule().with_exclude(Condition::predicate("vendor", |path| {
			path.starts_with("vendor/")
		}));
		assert!(rule.matches("src/a.less"));
		assert!(!rule.matches("vendor/a.less"));
		assert!(!rule.matches("src/a.css"));
	}

	#[test]
	fn include_narrows_test() {
		let rule = less_rule().with_include(Condition::pattern(Regex::new("node_modules").unwrap()));
		assert!(rule.matches("node_modules/pkg/a.less"));
		assert!(!rule.matches("src/a.less"));
	}

	#[test]
	fn serializes_steps_under_use() {
		let value = serde_json::to_value(less_rule()).unwrap();
		assert_eq!(value["name"], "less");
		assert_eq!(value["test"], r"/\.less$/");
		assert!(value["use"].as_array().unwrap().is_empty());
		assert!(value.get("exclude").is_none());
	}
}
