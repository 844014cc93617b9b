use sheet_rules::PartialOptions;

use crate::cli::CliArgs;

/// Translate command-line flags into a partial options layer.
///
/// Only flags the user actually passed are set, so the layer can be merged over
/// file and environment configuration without clobbering it.
pub(super) fn cli_overrides(cli: &CliArgs) -> PartialOptions {
	PartialOptions {
		cwd: cli.cwd.clone(),
		filename_hashing: cli.filename_hashing,
		modules: cli.modules,
		modules_with_affix: cli.modules_with_affix,
		source_map: cli.source_map,
		compress: cli.compress,
		use_poststylus: cli.use_poststylus,
		ssr: cli.ssr,
		css_public_path: cli.css_public_path.clone(),
		..PartialOptions::default()
	}
}
