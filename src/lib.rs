//! Style-sheet rule composition for bundler configurations.
//!
//! [`options::resolve`] turns caller input into [`ResolvedOptions`]; a
//! [`RuleEngine`] built from those options registers CSS, Less, Sass and Stylus
//! rules into any [`RuleTarget`] and declares the extraction plugin.
//!
//! ```ignore
//! use sheet_rules::{BuildEnvironment, FsProbe, PartialOptions, RuleEngine};
//!
//! let options = PartialOptions::default().resolve(BuildEnvironment::from_env(), &FsProbe)?;
//! let engine = RuleEngine::new(options);
//! engine.use_stylus(&mut host)?;
//! engine.extract_css(&mut host)?;
//! ```

pub mod app_dirs;
pub mod chain;
pub mod environment;
pub mod exclusion;
pub mod extract;
pub mod logging;
pub mod options;
pub mod probe;
pub mod registrar;

pub use sheet_rules_api as api;
pub use sheet_rules_api::{
	Condition, Dialect, HostConfig, ModuleRules, PluginDeclaration, PluginHandle, RuleEntry,
	RuleListError, RuleSpec, RuleTarget, StepDescriptor, StepOptions,
};

pub use chain::{ChainFlags, append_steps, step_chain};
pub use environment::BuildEnvironment;
pub use exclusion::ExclusionPredicate;
pub use options::{PartialOptions, ResolveError, ResolvedOptions, resolve};
pub use probe::{FsProbe, ProjectProbe, StaticProbe};
pub use registrar::RuleEngine;
