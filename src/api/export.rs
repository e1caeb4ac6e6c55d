use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DashboardError, DashboardResult};

use super::DashboardEngine;
use super::prefs::PreferenceStore;

pub const CSV_HEADER: [&str; 6] = ["Date", "Open", "High", "Low", "Close", "Volume"];

/// A ready-to-save CSV document. The engine produces the bytes and the
/// suggested name; actually writing a file is the host's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
}

impl<P: PreferenceStore> DashboardEngine<P> {
    /// CSV of the selected entity's range-filtered series, one row per
    /// observation with ISO dates. `None` when nothing is selected.
    pub fn csv_export(&self) -> DashboardResult<Option<CsvExport>> {
        let Some(entity) = self.session.selected_entity.as_deref() else {
            return Ok(None);
        };
        let series = self.filtered_series(entity);

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(CSV_HEADER)
            .map_err(|e| DashboardError::Export(format!("failed to write csv header: {e}")))?;
        for obs in &series {
            writer
                .write_record([
                    obs.date.format("%Y-%m-%d").to_string(),
                    obs.open.to_string(),
                    obs.high.to_string(),
                    obs.low.to_string(),
                    obs.close.to_string(),
                    obs.volume.to_string(),
                ])
                .map_err(|e| DashboardError::Export(format!("failed to write csv row: {e}")))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| DashboardError::Export(format!("failed to flush csv: {e}")))?;
        let contents = String::from_utf8(bytes)
            .map_err(|e| DashboardError::Export(format!("csv output was not utf-8: {e}")))?;

        debug!(entity = %entity, rows = series.len(), "csv export");
        Ok(Some(CsvExport {
            file_name: format!("{}_stock_data.csv", sanitize_file_stem(entity)),
            contents,
        }))
    }

    /// Suggested name for a chart snapshot image: `{entity}_{today}.png`
    /// with whitespace turned into underscores, or `chart_{today}.png` when
    /// nothing is selected. The image bytes come from the renderer, not the
    /// engine.
    #[must_use]
    pub fn chart_image_file_name(&self) -> String {
        let stem = self
            .session
            .selected_entity
            .as_deref()
            .map_or_else(|| "chart".to_owned(), sanitize_file_stem);
        format!("{stem}_{}.png", self.today.format("%Y-%m-%d"))
    }
}

/// Replaces each whitespace character with an underscore, keeping file names
/// shell-friendly without renaming the entity.
fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sanitize_file_stem;

    #[test]
    fn sanitize_maps_each_whitespace_char_to_one_underscore() {
        assert_eq!(sanitize_file_stem("S&P 500"), "S&P_500");
        assert_eq!(sanitize_file_stem("A  B"), "A__B");
        assert_eq!(sanitize_file_stem("DAX"), "DAX");
    }
}
