use anyhow::{Context, Result};
use pondforge_core::PondforgeError;
use pondforge_schemas::file_formats::FarmScenario;
use std::{fs, path::Path};
use tracing::info;

/// Loads a farm scenario. Sections missing from the file are left empty and
/// their calculators report "not computable".
pub fn load_scenario(path: &Path) -> Result<FarmScenario> {
    info!("Loading farm scenario from '{}'", path.display());

    let content = fs::read_to_string(path)
        .map_err(|e| PondforgeError::FileIO(path.display().to_string(), e))
        .context("Failed to read scenario file")?;
    let scenario: FarmScenario = serde_yaml::from_str(&content)
        .map_err(|e| PondforgeError::YamlParsing(path.display().to_string(), e))
        .context("Failed to parse scenario file")?;

    info!(
        farm = scenario.farm_name.as_deref().unwrap_or("unnamed"),
        edits = scenario.cost_edits.len(),
        "scenario loaded"
    );
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_scenario_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenario.yaml");
        let scenario = load_scenario(&path).unwrap();
        assert!(scenario.farm_name.is_some());
        assert!(scenario.pond.length_m.is_some());
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_scenario(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.yaml"));
    }
}
