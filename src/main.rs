mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use sheet_rules::logging;
use workflow::RuleWorkflow;

fn main() -> Result<()> {
	logging::initialize();
	let cli = parse_cli();

	let options = settings::load(&cli)?;

	if cli.print_config {
		settings::print_summary(&options);
	}

	let dialects = cli.dialects.iter().map(|arg| arg.dialect()).collect();
	let report = RuleWorkflow::new(options, dialects).run(&cli.route)?;

	match cli.output {
		OutputFormat::Plain => print_plain(&report),
		OutputFormat::Json => print_json(&report)?,
	}

	Ok(())
}
