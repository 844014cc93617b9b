//! Declaration of the sheet-extraction plugin.

use sheet_rules_api::{PluginDeclaration, PluginHandle, RuleListError, RuleTarget};

use crate::options::ResolvedOptions;

pub const EXTRACT_PLUGIN: &str = "extract-css";
pub const EXTRACT_PLUGIN_ID: &str = "mini-css-extract-plugin";

const CONTENT_HASH: &str = ".[contenthash:8]";

/// The extraction plugin declaration, or `None` under server rendering.
pub fn extraction_plugin(options: &ResolvedOptions) -> Option<PluginDeclaration> {
	if options.is_server_rendering {
		return None;
	}

	let hash = if !options.is_development && options.filename_hashing_enabled {
		CONTENT_HASH
	} else {
		""
	};

	Some(PluginDeclaration {
		name: EXTRACT_PLUGIN.to_string(),
		plugin: EXTRACT_PLUGIN_ID.to_string(),
		filename: format!("[name]{hash}.css"),
		chunk_filename: format!("[name]{hash}.chunk.css"),
	})
}

pub fn register_extraction_plugin<T: RuleTarget + ?Sized>(
	options: &ResolvedOptions,
	target: &mut T,
) -> Result<Option<PluginHandle>, RuleListError> {
	let Some(declaration) = extraction_plugin(options) else {
		tracing::debug!("server rendering active; skipping extraction plugin");
		return Ok(None);
	};
	tracing::info!(filename = %declaration.filename, "registering extraction plugin");
	target.add_plugin(declaration).map(Some)
}
