use std::env;

const NODE_ENV: &str = "NODE_ENV";

/// Build mode the configuration pass runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildEnvironment {
	pub is_development: bool,
}

impl BuildEnvironment {
	pub fn development() -> Self {
		Self {
			is_development: true,
		}
	}

	pub fn production() -> Self {
		Self {
			is_development: false,
		}
	}

	/// Detect the mode from `NODE_ENV`.
	pub fn from_env() -> Self {
		Self::from_node_env(env::var(NODE_ENV).ok().as_deref())
	}

	/// An unset, empty or `development` value means a development build.
	pub fn from_node_env(value: Option<&str>) -> Self {
		let is_development = match value.map(str::trim) {
			None | Some("") => true,
			Some(mode) => mode == "development",
		};
		Self { is_development }
	}
}
