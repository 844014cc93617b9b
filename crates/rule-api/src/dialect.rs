use std::fmt;

use serde::{Deserialize, Serialize};

/// Style-sheet source languages handled by a dedicated rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
	Css,
	Less,
	Sass,
	Stylus,
}

impl Dialect {
	/// Every dialect in registration order.
	pub const ALL: [Dialect; 4] = [Dialect::Css, Dialect::Less, Dialect::Sass, Dialect::Stylus];

	/// Stable identifier used for rule names and configuration keys.
	pub fn id(self) -> &'static str {
		match self {
			Dialect::Css => "css",
			Dialect::Less => "less",
			Dialect::Sass => "sass",
			Dialect::Stylus => "stylus",
		}
	}

	/// Plain CSS needs no transformation step of its own.
	pub fn has_transform(self) -> bool {
		!matches!(self, Dialect::Css)
	}
}

impl fmt::Display for Dialect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}
