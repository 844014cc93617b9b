use clap::ValueEnum;

use sheet_rules::{BuildEnvironment, Dialect};

/// Style-sheet dialects selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DialectArg {
	Css,
	Less,
	Sass,
	Stylus,
}

impl DialectArg {
	pub(crate) fn dialect(self) -> Dialect {
		match self {
			DialectArg::Css => Dialect::Css,
			DialectArg::Less => Dialect::Less,
			DialectArg::Sass => Dialect::Sass,
			DialectArg::Stylus => Dialect::Stylus,
		}
	}
}

/// Build modes accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ModeArg {
	Development,
	Production,
}

impl ModeArg {
	pub(crate) fn environment(self) -> BuildEnvironment {
		match self {
			ModeArg::Development => BuildEnvironment::development(),
			ModeArg::Production => BuildEnvironment::production(),
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
