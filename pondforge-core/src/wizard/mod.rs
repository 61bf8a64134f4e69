//! The linear Growth → Feed → Aeration → Water → Economics flow and the
//! context values passed between its steps.

pub mod builder;
pub mod engine;
pub mod state;

pub use builder::WizardBuilder;
pub use engine::WizardSession;
pub use state::{CostField, CostSheet, FeedContext, FieldOrigin, GrowthContext, WizardStep};
