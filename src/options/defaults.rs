//! Built-in defaults used when the caller leaves a setting unspecified.

use serde_json::{Value, json};

use sheet_rules_api::{Dialect, StepOptions};

pub const FILENAME_HASHING: bool = true;
pub const MODULES: bool = false;
pub const MODULES_WITH_AFFIX: bool = true;
pub const SOURCE_MAP: bool = true;
pub const COMPRESS: bool = true;
pub const USE_POSTSTYLUS: bool = false;
pub const SSR: bool = false;

/// Module naming template for development builds; keeps the source file name.
pub const DEV_LOCAL_IDENT_NAME: &str = "[name]__[local]___[hash:base64:5]";
/// Module naming template for production builds; omits the source file name.
pub const PROD_LOCAL_IDENT_NAME: &str = "[local]___[hash:base64:5]";

pub const DEFAULT_BROWSERS: [&str; 4] = [">1%", "last 4 versions", "Firefox ESR", "not ie < 9"];

pub const BROWSERSLIST_FILES: [&str; 2] = ["browserslist", ".browserslistrc"];
pub const POSTCSS_CONFIG_FILES: [&str; 5] = [
	".postcssrc",
	".postcssrc.js",
	"postcss.config.js",
	".postcssrc.yaml",
	".postcssrc.json",
];

pub const POSTCSS_TEST: &str = r"\.p(ost)?css$";
pub const POSTCSS_LOADER: &str = "postcss-loader";
pub const POSTCSS_IDENT: &str = "postcss";

pub const FLEXBUGS_FIXES: &str = "postcss-flexbugs-fixes";
pub const AUTOPREFIXER: &str = "autoprefixer";
pub const CSSNANO: &str = "cssnano";

/// Default dialect section: general pattern, affix pattern, loader, options.
pub struct DialectDefaults {
	pub test: &'static str,
	pub affix: &'static str,
	pub loader: &'static str,
	pub options: fn() -> StepOptions,
}

pub fn dialect(dialect: Dialect) -> DialectDefaults {
	match dialect {
		Dialect::Css => DialectDefaults {
			test: r"\.css$",
			affix: r"\.module\.css$",
			loader: "css-loader",
			options: StepOptions::new,
		},
		Dialect::Less => DialectDefaults {
			test: r"\.less$",
			affix: r"\.module\.less$",
			loader: "less-loader",
			options: || object(json!({ "javascriptEnabled": true })),
		},
		Dialect::Sass => DialectDefaults {
			test: r"\.(sass|scss)$",
			affix: r"\.module\.(sass|scss)$",
			loader: "sass-loader",
			options: || object(json!({ "indentedSyntax": true })),
		},
		Dialect::Stylus => DialectDefaults {
			test: r"\.styl(us)?$",
			affix: r"\.module\.styl(us)?$",
			loader: "stylus-loader",
			options: || object(json!({ "preferPathResolver": "webpack" })),
		},
	}
}

/// Structural passes disabled so minification never rewrites non-trivial selectors.
pub fn conservative_cssnano() -> StepOptions {
	object(json!({
		"mergeRules": false,
		"normalizeUrl": false,
		"mergeLonghand": false,
		"cssDeclarationSorter": false,
	}))
}

pub fn default_browsers() -> Vec<String> {
	DEFAULT_BROWSERS.iter().map(|browser| browser.to_string()).collect()
}

pub(crate) fn object(value: Value) -> StepOptions {
	match value {
		Value::Object(map) => map,
		_ => StepOptions::new(),
	}
}
