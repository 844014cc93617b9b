use sheet_rules::{Dialect, ResolvedOptions};

/// Print the effective options to standard output.
pub(crate) fn print_summary(options: &ResolvedOptions) {
	print!("{}", format_summary(options));
}

pub(crate) fn format_summary(options: &ResolvedOptions) -> String {
	let mut lines = vec![
		"Effective options:".to_string(),
		format!("  Context: {}", options.context_directory.display()),
		format!(
			"  Mode: {}",
			if options.is_development {
				"development"
			} else {
				"production"
			}
		),
		format!("  CSS modules: {}", bool_to_word(options.css_modules_global)),
		format!(
			"  CSS modules by affix: {}",
			bool_to_word(options.css_modules_by_affix)
		),
		format!("  Source maps: {}", bool_to_word(options.source_map_enabled)),
		format!("  Compress: {}", bool_to_word(options.compress_enabled)),
		format!(
			"  Filename hashing: {}",
			bool_to_word(options.filename_hashing_enabled)
		),
		format!(
			"  Poststylus: {}",
			bool_to_word(options.use_alternate_postprocessor)
		),
		format!(
			"  Server rendering: {}",
			bool_to_word(options.is_server_rendering)
		),
		format!("  Local ident name: {}", options.local_ident_name),
	];
	match &options.browsers {
		Some(browsers) => lines.push(format!("  Browsers: {}", browsers.join(", "))),
		None => lines.push("  Browsers: (from project config)".to_string()),
	}
	match &options.css_public_path {
		Some(path) => lines.push(format!("  CSS public path: {path}")),
		None => lines.push("  CSS public path: (unset)".to_string()),
	}
	for dialect in Dialect::ALL {
		let settings = options.dialect(dialect);
		lines.push(format!(
			"  {dialect}: test=/{}/ affix=/{}/ loader={}",
			settings.test.as_str(),
			settings.affix.as_str(),
			settings.loader
		));
	}
	lines.push(format!(
		"  postcss: test=/{}/ loader={} plugins={}",
		options.postcss.test.as_str(),
		options.postcss.loader,
		match &options.postcss.plugins {
			Some(plugins) => plugins
				.iter()
				.map(|plugin| plugin.name.as_str())
				.collect::<Vec<_>>()
				.join(", "),
			None => "(project config)".to_string(),
		}
	));

	let mut out = lines.join("\n");
	out.push('\n');
	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "enabled" } else { "disabled" }
}
