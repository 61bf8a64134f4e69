use crate::{
    error::PondforgeError,
    logger::ReportWriter,
    report::FarmReport,
    wizard::{
        engine::WizardSession,
        state::{FeedContext, GrowthContext, WizardStep},
    },
};
use pondforge_schemas::{command::CostEdit, file_formats::FarmScenario};

/// Scenario files this build understands, by major version.
const SUPPORTED_SCHEMA_MAJOR: &str = "1";

/// A fluent builder for constructing a `WizardSession`.
///
/// A scenario is required. Cost edits given here are applied after any edits
/// listed in the scenario file itself.
#[derive(Default)]
pub struct WizardBuilder {
    scenario: Option<FarmScenario>,
    cost_edits: Vec<CostEdit>,
    report_path: Option<String>,
}

impl WizardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scenario(mut self, scenario: FarmScenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    pub fn with_cost_edit(mut self, edit: CostEdit) -> Self {
        self.cost_edits.push(edit);
        self
    }

    pub fn with_cost_edits(mut self, edits: Vec<CostEdit>) -> Self {
        self.cost_edits.extend(edits);
        self
    }

    /// Writes the flat CSV report to `path` when the session finishes.
    pub fn with_report_logging_to_file(mut self, path: &str) -> Self {
        self.report_path = Some(path.to_string());
        self
    }

    /// # Errors
    ///
    /// Fails when no scenario was given, when its schema version is not
    /// supported, or when the report file cannot be created.
    pub fn build(self) -> Result<WizardSession, PondforgeError> {
        let scenario = self.scenario.ok_or(PondforgeError::ScenarioNotDefined)?;

        let version = scenario.schema_version.trim();
        if !version.is_empty() && version.split('.').next() != Some(SUPPORTED_SCHEMA_MAJOR) {
            return Err(PondforgeError::UnsupportedSchemaVersion(version.to_string()));
        }

        let mut cost_edits = scenario.cost_edits.clone();
        cost_edits.extend(self.cost_edits);

        let writer = match self.report_path {
            Some(path) => Some(ReportWriter::new(&path)?),
            None => None,
        };

        Ok(WizardSession {
            report: FarmReport::new(scenario.farm_name.clone()),
            scenario,
            next_step: Some(WizardStep::Growth),
            growth_context: GrowthContext::default(),
            feed_context: FeedContext::default(),
            cost_edits,
            writer,
        })
    }
}
