//! Build a host configuration and register style-sheet rules into it.

use anyhow::{Context, Result};
use regex::Regex;
use serde_json::json;
use sheet_rules::{
	Condition, Dialect, HostConfig, ResolvedOptions, RuleEngine, RuleSpec, StepDescriptor,
};

const CATCH_ALL_RULE: &str = "file";
const CATCH_ALL_LOADER: &str = "file-loader";

/// Configuration produced by a [`RuleWorkflow`] run.
#[derive(Debug)]
pub(crate) struct RuleReport {
	pub(crate) config: HostConfig,
	/// Each requested path and the name of the rule that handles it.
	pub(crate) routes: Vec<(String, Option<String>)>,
}

/// Registers the selected dialects into a fresh host configuration.
pub(crate) struct RuleWorkflow {
	engine: RuleEngine,
	dialects: Vec<Dialect>,
}

impl RuleWorkflow {
	/// An empty dialect list selects every dialect.
	pub(crate) fn new(options: ResolvedOptions, dialects: Vec<Dialect>) -> Self {
		let dialects = if dialects.is_empty() {
			Dialect::ALL.to_vec()
		} else {
			dedup_preserving_order(dialects)
		};
		Self {
			engine: RuleEngine::new(options),
			dialects,
		}
	}

	pub(crate) fn run(&self, route: &[String]) -> Result<RuleReport> {
		let mut config = HostConfig::with_catch_all(catch_all_rule()?);
		for &dialect in &self.dialects {
			self.engine
				.register(dialect, &mut config)
				.with_context(|| format!("failed to register {dialect} rules"))?;
		}
		self.engine
			.extract_css(&mut config)
			.context("failed to declare the extraction plugin")?;

		let routes = route
			.iter()
			.map(|path| {
				let rule = config.module.route(path).map(|rule| rule.name.clone());
				tracing::debug!(path = %path, rule = ?rule, "routed path");
				(path.clone(), rule)
			})
			.collect();

		Ok(RuleReport { config, routes })
	}
}

/// The host's own terminal rule: anything no style rule claimed is emitted as a file.
fn catch_all_rule() -> Result<RuleSpec> {
	let mut options = serde_json::Map::new();
	options.insert("name".to_string(), json!("static/[name].[hash:8].[ext]"));
	Ok(RuleSpec::new(CATCH_ALL_RULE, Condition::pattern(Regex::new(".*")?))
		.with_steps(vec![StepDescriptor::new(
			CATCH_ALL_LOADER,
			CATCH_ALL_LOADER,
			options,
		)]))
}

fn dedup_preserving_order(dialects: Vec<Dialect>) -> Vec<Dialect> {
	let mut unique = Vec::with_capacity(dialects.len());
	for dialect in dialects {
		if !unique.contains(&dialect) {
			unique.push(dialect);
		}
	}
	unique
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use sheet_rules::{BuildEnvironment, PartialOptions, StaticProbe};

	use super::*;

	fn options() -> ResolvedOptions {
		let partial = PartialOptions {
			cwd: Some(PathBuf::from("/project")),
			..PartialOptions::default()
		};
		partial
			.resolve(BuildEnvironment::development(), &StaticProbe::new())
			.expect("resolve")
	}

	#[test]
	fn default_selection_registers_every_dialect() {
		let report = RuleWorkflow::new(options(), Vec::new()).run(&[]).expect("run");
		let names: Vec<&str> = report
			.config
			.module
			.iter()
			.map(|rule| rule.name.as_str())
			.collect();
		assert_eq!(names.len(), 13);
		assert_eq!(names[0], "module.css");
		assert_eq!(names[12], CATCH_ALL_RULE);
		assert_eq!(report.config.plugins.len(), 1);
	}

	#[test]
	fn repeated_dialects_register_once() {
		let report = RuleWorkflow::new(options(), vec![Dialect::Sass, Dialect::Sass])
			.run(&[])
			.expect("run");
		assert!(report.config.module.contains("sass"));
		assert_eq!(report.config.module.iter().count(), 4);
	}

	#[test]
	fn routes_report_the_first_matching_rule() {
		let paths = vec![
			"src/app.module.scss".to_string(),
			"node_modules/pkg/index.css".to_string(),
			"logo.png".to_string(),
		];
		let report = RuleWorkflow::new(options(), Vec::new())
			.run(&paths)
			.expect("run");
		assert_eq!(report.routes[0].1.as_deref(), Some("module.sass"));
		assert_eq!(report.routes[1].1.as_deref(), Some("css-in-node_modules"));
		assert_eq!(report.routes[2].1.as_deref(), Some(CATCH_ALL_RULE));
	}
}
