use thiserror::Error;

#[derive(Debug, Error)]
pub enum PondforgeError {
    #[error("No value entered for '{field}'")]
    EmptyInput { field: String },

    #[error("Value '{raw}' for '{field}' is not a number")]
    NotNumeric { field: String, raw: String },

    #[error("Value {value} for '{field}' must not be negative")]
    NegativeInput { field: String, value: f64 },

    #[error("Value {value} for '{field}' is outside the accepted range {min}..={max}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("'{key}' is not a known entry of the {table} table")]
    UnknownKey { table: String, key: String },

    #[error("No farm scenario was provided to the wizard")]
    ScenarioNotDefined,

    #[error("Unsupported scenario schema version '{0}'")]
    UnsupportedSchemaVersion(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to write CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}

impl PondforgeError {
    pub fn out_of_range(field: &str, value: f64, min: f64, max: f64) -> Self {
        PondforgeError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        }
    }

    pub fn unknown_key(table: &str, key: &str) -> Self {
        PondforgeError::UnknownKey {
            table: table.to_string(),
            key: key.to_string(),
        }
    }

    /// True for the parse failures that mean "nothing usable was entered yet".
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            PondforgeError::EmptyInput { .. }
                | PondforgeError::NotNumeric { .. }
                | PondforgeError::NegativeInput { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PondforgeError::out_of_range("TAN", 12.0, 0.01, 10.0);
        assert_eq!(
            err.to_string(),
            "Value 12 for 'TAN' is outside the accepted range 0.01..=10"
        );

        let err = PondforgeError::unknown_key("genetic line", "Mystery");
        assert_eq!(
            err.to_string(),
            "'Mystery' is not a known entry of the genetic line table"
        );
    }

    #[test]
    fn parse_failures_count_as_missing_input() {
        let err = PondforgeError::EmptyInput {
            field: "width".into(),
        };
        assert!(err.is_missing_input());
        assert!(!PondforgeError::out_of_range("x", 1.0, 2.0, 3.0).is_missing_input());
    }
}
