use serde::Serialize;
use serde_json::{Map, Value};

/// Options payload handed verbatim to a processing step.
pub type StepOptions = Map<String, Value>;

/// One processing stage in a rule's `use` chain.
///
/// Steps are identified by their position in the chain; the engine never reorders
/// them once emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepDescriptor {
	/// Logical step name, e.g. `css-loader`.
	pub name: String,
	/// Resolved loader identifier passed to the host pipeline.
	pub loader: String,
	pub options: StepOptions,
}

impl StepDescriptor {
	pub fn new(name: impl Into<String>, loader: impl Into<String>, options: StepOptions) -> Self {
		Self {
			name: name.into(),
			loader: loader.into(),
			options,
		}
	}

	/// Lookup a single option key.
	pub fn option(&self, key: &str) -> Option<&Value> {
		self.options.get(key)
	}
}
