//! Configuration loading for the `sheet-rules` binary.
//!
//! Config files and `SHEET_RULES__*` environment variables feed a
//! [`PartialOptions`](sheet_rules::PartialOptions); command-line flags are merged
//! on top, and the result is resolved against the project directory.

mod loader;
mod origin;
mod overrides;
mod sources;
mod summary;

pub(crate) use loader::load;
pub(crate) use summary::print_summary;
