use anyhow::Result;
use serde_json::json;
use sheet_rules::{HostConfig, RuleEntry, RuleSpec};

use crate::workflow::RuleReport;

/// Print a plain-text representation of the generated configuration.
pub(crate) fn print_plain(report: &RuleReport) {
	print!("{}", format_plain(report));
}

pub(crate) fn format_plain(report: &RuleReport) -> String {
	let mut out = String::new();
	for entry in report.config.module.entries() {
		match entry {
			RuleEntry::Rule(rule) => describe_rule(&mut out, rule, ""),
			RuleEntry::OneOf { one_of } => {
				out.push_str("oneOf:\n");
				for rule in one_of {
					describe_rule(&mut out, rule, "  ");
				}
			}
		}
	}
	for plugin in report.config.plugins.iter() {
		out.push_str(&format!(
			"plugin {} ({}): {} / {}\n",
			plugin.name, plugin.plugin, plugin.filename, plugin.chunk_filename
		));
	}
	for (path, rule) in &report.routes {
		out.push_str(&format!(
			"route {path} -> {}\n",
			rule.as_deref().unwrap_or("(no rule)")
		));
	}
	out
}

fn describe_rule(out: &mut String, rule: &RuleSpec, indent: &str) {
	out.push_str(&format!("{indent}{} test={}", rule.name, rule.test));
	if let Some(include) = &rule.include {
		out.push_str(&format!(" include={include}"));
	}
	if let Some(exclude) = &rule.exclude {
		out.push_str(&format!(" exclude={exclude}"));
	}
	out.push('\n');
	for step in &rule.steps {
		out.push_str(&format!("{indent}  - {} ({})\n", step.name, step.loader));
	}
}

/// Format the generated configuration as a JSON string.
pub(crate) fn format_report_json(report: &RuleReport) -> Result<String> {
	let routes: serde_json::Map<String, serde_json::Value> = report
		.routes
		.iter()
		.map(|(path, rule)| (path.clone(), json!(rule)))
		.collect();
	let payload = json!({
		"config": config_json(&report.config)?,
		"routes": routes,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

fn config_json(config: &HostConfig) -> Result<serde_json::Value> {
	Ok(serde_json::to_value(config)?)
}

/// Print the JSON representation of the generated configuration.
pub(crate) fn print_json(report: &RuleReport) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use serde_json::Value;
	use sheet_rules::{BuildEnvironment, Dialect, PartialOptions, StaticProbe};

	use super::*;
	use crate::workflow::RuleWorkflow;

	fn report() -> RuleReport {
		let partial = PartialOptions {
			cwd: Some(PathBuf::from("/project")),
			..PartialOptions::default()
		};
		let options = partial
			.resolve(BuildEnvironment::production(), &StaticProbe::new())
			.unwrap();
		RuleWorkflow::new(options, vec![Dialect::Less])
			.run(&["src/a.module.less".to_string()])
			.unwrap()
	}

	#[test]
	fn plain_format_lists_rules_plugins_and_routes() {
		let text = format_plain(&report());
		assert!(text.contains("oneOf:\n"));
		assert!(text.contains("  module.less test=/\\.module\\.less$/"));
		assert!(text.contains("    - less-loader (less-loader)"));
		assert!(text.contains("plugin extract-css (mini-css-extract-plugin)"));
		assert!(text.contains("route src/a.module.less -> module.less"));
	}

	#[test]
	fn json_format_includes_rules_and_routes() {
		let json = format_report_json(&report()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		let one_of = &value["config"]["module"]["rules"][0]["oneOf"];
		assert_eq!(one_of[0]["name"], "module.less");
		assert_eq!(one_of[3]["name"], "file");
		assert_eq!(value["routes"]["src/a.module.less"], "module.less");
		assert_eq!(
			value["config"]["plugins"][0]["filename"],
			"[name].[contenthash:8].css"
		);
	}
}
