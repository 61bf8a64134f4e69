use crate::{error::PondforgeError, report::FarmReport};
use csv::Writer;
use std::fs;

/// Writes the flat `section,metric,value,unit` CSV export of a report. Each
/// write replaces the file, so it always holds exactly one report.
pub struct ReportWriter {
    path: String,
}

impl ReportWriter {
    pub fn new(path: &str) -> Result<Self, PondforgeError> {
        fs::File::create(path).map_err(|e| PondforgeError::FileIO(path.to_string(), e))?;
        Ok(Self {
            path: path.to_string(),
        })
    }

    pub fn write_report(&mut self, report: &FarmReport) -> Result<(), PondforgeError> {
        let mut writer = Writer::from_path(&self.path)
            .map_err(|e| PondforgeError::CsvError(self.path.clone(), e))?;
        for row in report.rows() {
            writer
                .serialize(&row)
                .map_err(|e| PondforgeError::CsvError(self.path.clone(), e))?;
        }
        writer
            .flush()
            .map_err(|e| PondforgeError::FileIO(self.path.clone(), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::PondGeometry;

    #[test]
    fn writes_header_and_rows() {
        let path = std::env::temp_dir().join(format!("pondforge_report_{}.csv", std::process::id()));
        let path_str = path.to_string_lossy().to_string();

        let mut report = FarmReport::default();
        report.growth.pond = Some(PondGeometry::new(100.0, 50.0));

        let mut writer = ReportWriter::new(&path_str).unwrap();
        writer.write_report(&report).unwrap();
        drop(writer);

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("section,metric,value,unit"));
        assert_eq!(lines.next(), Some("growth,pond_area,5000.0,m2"));
        assert!(contents.contains("growth,total_pl,,PL"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn rewriting_replaces_the_previous_report() {
        let path = std::env::temp_dir().join(format!("pondforge_rewrite_{}.csv", std::process::id()));
        let path_str = path.to_string_lossy().to_string();

        let report = FarmReport::default();
        let mut writer = ReportWriter::new(&path_str).unwrap();
        writer.write_report(&report).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        writer.write_report(&report).unwrap();
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.matches("section,metric,value,unit").count(), 1);
        fs::remove_file(&path).ok();
    }
}
