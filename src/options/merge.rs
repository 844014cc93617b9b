use serde_json::Value;

use sheet_rules_api::StepOptions;

/// Merge `overlay` into `base` key by key.
///
/// Nested objects merge recursively; every other value in `overlay`, arrays
/// included, replaces the corresponding value in `base`.
pub fn merge_options(base: &mut StepOptions, overlay: StepOptions) {
	for (key, value) in overlay {
		let Value::Object(next) = value else {
			base.insert(key, value);
			continue;
		};
		if let Some(Value::Object(current)) = base.get_mut(&key) {
			merge_options(current, next);
			continue;
		}
		base.insert(key, Value::Object(next));
	}
}

/// Return `base` with `overlay` merged over it.
pub fn merged(mut base: StepOptions, overlay: Option<StepOptions>) -> StepOptions {
	if let Some(overlay) = overlay {
		merge_options(&mut base, overlay);
	}
	base
}
