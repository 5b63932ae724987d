//! Per-user upload state for the interactive view.
//!
//! A `Session` owns the flagged dataset of the most recent successful upload.
//! Every view request re-runs partitioning and aggregation on that value;
//! nothing is cached between requests.

use tracing::{debug, info};

use crate::config::ReportConfig;
use crate::constants::partition::OVERALL;
use crate::errors::VennError;
use crate::pipeline::{FlaggedDataset, derive_flags, list_commodities, load_and_filter};
use crate::report::{Report, build_report};
use crate::source::TableSource;

/// Uploaded dataset of one user.
#[derive(Clone, Debug, Default)]
pub struct Session {
    dataset: Option<FlaggedDataset>,
    source_id: Option<String>,
}

impl Session {
    /// Session with nothing uploaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load, filter, and flag `source`, replacing the held dataset.
    ///
    /// On failure the previous dataset stays in place.
    pub fn upload(&mut self, source: &dyn TableSource) -> Result<(), VennError> {
        let table = source.load()?;
        let dataset = derive_flags(&load_and_filter(&table)?);
        info!(
            source = source.id(),
            records = dataset.len(),
            "session dataset replaced"
        );
        self.dataset = Some(dataset);
        self.source_id = Some(source.id().to_string());
        Ok(())
    }

    /// Flagged dataset of the last successful upload.
    pub fn dataset(&self) -> Option<&FlaggedDataset> {
        self.dataset.as_ref()
    }

    /// Id of the source behind the held dataset.
    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    /// Drop the held dataset.
    pub fn clear(&mut self) {
        self.dataset = None;
        self.source_id = None;
    }

    /// Build a report for `config`, or `None` when nothing has been uploaded.
    pub fn view(&self, config: &ReportConfig) -> Option<Report> {
        let Some(dataset) = self.dataset.as_ref() else {
            debug!("view requested before any upload");
            return None;
        };
        Some(build_report(dataset, config))
    }

    /// Selection options: `Overall` followed by the sorted commodities.
    pub fn commodity_options(&self) -> Vec<String> {
        let mut options = vec![OVERALL.to_string()];
        if let Some(dataset) = &self.dataset {
            options.extend(list_commodities(dataset));
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportScope;
    use crate::data::PartitionSelector;
    use crate::source::CsvBytesSource;

    const CSV: &str = "Order ID,Overall Compliance,Overall Safety Classification,Overall Quality Classification,Overall Labelling Complaince,Commodity\n\
        A,Non-Compliant,Unsafe,Standard,Correctly Labelled,Rice\n\
        B,Compliant as per FSSR,Unsafe,Sub-Standard,Mis-labelled,Rice\n\
        C,Non-Compliant,Safe,Sub-Standard,,Wheat\n";

    #[test]
    fn view_before_upload_is_none() {
        let session = Session::new();
        assert!(session.view(&ReportConfig::default()).is_none());
        assert_eq!(session.commodity_options(), vec!["Overall"]);
    }

    #[test]
    fn upload_then_view_selected_partition() {
        let mut session = Session::new();
        session
            .upload(&CsvBytesSource::new("inspections.csv", CSV))
            .unwrap();
        assert_eq!(session.source_id(), Some("inspections.csv"));
        assert_eq!(session.commodity_options(), vec!["Overall", "Rice", "Wheat"]);

        let config = ReportConfig::default()
            .with_scope(ReportScope::Single(PartitionSelector::commodity("Wheat")));
        let report = session.view(&config).unwrap();
        assert_eq!(report.partitions.len(), 1);
        assert!(report.partitions[0].sets.sub_standard_ids.contains("C"));
    }

    #[test]
    fn failed_upload_keeps_previous_dataset() {
        let mut session = Session::new();
        session.upload(&CsvBytesSource::new("good.csv", CSV)).unwrap();
        let err = session
            .upload(&CsvBytesSource::new("bad.csv", "Order ID,Commodity\nX,Rice\n"))
            .unwrap_err();
        assert!(matches!(err, VennError::MissingColumn { .. }));
        assert_eq!(session.source_id(), Some("good.csv"));
        assert_eq!(session.dataset().unwrap().len(), 2);
    }

    #[test]
    fn upload_accepts_pre_parsed_tables() {
        use crate::constants::columns::REQUIRED;
        use crate::source::InMemorySource;
        use crate::table::RawTable;

        let table = RawTable::from_text_rows(
            REQUIRED,
            vec![["Z", "Non-Compliant", "", "", "Mis-labelled", "Tea"]],
        );
        let mut session = Session::new();
        session.upload(&InMemorySource::new("memory", table)).unwrap();
        let report = session.view(&ReportConfig::default()).unwrap();
        assert_eq!(report.partitions.len(), 2);
        assert_eq!(report.partitions[1].regions.only_c, 1);
    }

    #[test]
    fn clear_forgets_upload() {
        let mut session = Session::new();
        session.upload(&CsvBytesSource::new("good.csv", CSV)).unwrap();
        session.clear();
        assert!(session.dataset().is_none());
    }
}
