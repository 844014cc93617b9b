use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{DialectArg, ModeArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `sheet-rules` binary.
#[derive(Parser, Debug)]
#[command(
	name = "sheet-rules",
	version,
	long_version = long_version(),
	about = "Compose style-sheet processing rules for a bundler configuration",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SHEET_RULES_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'C',
		long,
		value_name = "PATH",
		help = "Project directory probed for browserslist and postcss configs (default: current directory)"
	)]
	pub(crate) cwd: Option<PathBuf>,
	#[arg(
		short = 'd',
		long = "dialect",
		value_enum,
		value_delimiter = ',',
		action = ArgAction::Append,
		help = "Dialects to register rules for (default: css,less,sass,stylus)"
	)]
	pub(crate) dialects: Vec<DialectArg>,
	#[arg(
		short = 'm',
		long,
		value_enum,
		help = "Build mode (default: derived from NODE_ENV)"
	)]
	pub(crate) mode: Option<ModeArg>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		help = "Treat every style sheet as a CSS module (default: disabled)"
	)]
	pub(crate) modules: Option<bool>,
	#[arg(
		long = "modules-with-affix",
		value_parser = BoolishValueParser::new(),
		help = "Treat *.module.* style sheets as CSS modules (default: enabled)"
	)]
	pub(crate) modules_with_affix: Option<bool>,
	#[arg(
		long = "source-map",
		value_parser = BoolishValueParser::new(),
		help = "Enable source maps for style sheets (default: enabled)"
	)]
	pub(crate) source_map: Option<bool>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		help = "Minify style sheets in production builds (default: enabled)"
	)]
	pub(crate) compress: Option<bool>,
	#[arg(
		long = "filename-hashing",
		value_parser = BoolishValueParser::new(),
		help = "Add a content hash to extracted sheet names in production (default: enabled)"
	)]
	pub(crate) filename_hashing: Option<bool>,
	#[arg(
		long = "use-poststylus",
		value_parser = BoolishValueParser::new(),
		help = "Let the Stylus step run postprocessing instead of postcss-loader (default: disabled)"
	)]
	pub(crate) use_poststylus: Option<bool>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		help = "Server-rendering build: no extraction step or plugin (default: disabled)"
	)]
	pub(crate) ssr: Option<bool>,
	#[arg(
		long = "css-public-path",
		value_name = "PATH",
		help = "Public path handed to the extraction step (default: unset)"
	)]
	pub(crate) css_public_path: Option<String>,
	#[arg(
		short = 'r',
		long = "route",
		value_name = "PATH",
		action = ArgAction::Append,
		help = "Print which rule handles the given file path"
	)]
	pub(crate) route: Vec<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved options before the rules (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
