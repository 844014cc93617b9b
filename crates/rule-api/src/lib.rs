//! Data model and host contract shared by the `sheet-rules` engine.
//!
//! The engine builds [`RuleSpec`] values whose `use` chains are ordered lists of
//! [`StepDescriptor`]s, then hands them to anything implementing [`RuleTarget`].

pub mod condition;
pub mod dialect;
pub mod error;
pub mod host;
pub mod rule;
pub mod step;

pub use condition::Condition;
pub use dialect::Dialect;
pub use error::RuleListError;
pub use host::{
	HostConfig, ModuleRules, PluginDeclaration, PluginHandle, PluginList, RuleEntry, RuleTarget,
};
pub use rule::RuleSpec;
pub use step::{StepDescriptor, StepOptions};
