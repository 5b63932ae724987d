//! Text renderer: region tables for terminal output.

use std::fmt::Write;

use super::Renderer;
use crate::constants::report::EMPTY_PARTITION_MESSAGE;
use crate::constants::venn::SET_LABELS;
use crate::errors::VennError;
use crate::report::{PartitionReport, Report};
use crate::venn::region_name;

/// Human-readable renderer.
pub struct TextRenderer;

impl TextRenderer {
    fn render_partition(&self, out: &mut String, entry: &PartitionReport) {
        let _ = writeln!(
            out,
            "--- {} ({} records) ---",
            entry.label, entry.record_count
        );
        if entry.is_empty() {
            let _ = writeln!(out, "{EMPTY_PARTITION_MESSAGE}");
            return;
        }
        let sizes = entry.regions.set_sizes();
        let totals: Vec<String> = SET_LABELS
            .iter()
            .zip(sizes)
            .map(|(label, size)| format!("{label}={size}"))
            .collect();
        let _ = writeln!(out, "sets         : {}", totals.join(" "));
        for (key, count) in entry.regions.as_subsets() {
            let _ = writeln!(out, "  {key} {:<28} {count}", region_name(key));
        }
        let _ = writeln!(out, "union        : {}", entry.regions.total());
    }
}

impl Renderer for TextRenderer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn render(&self, report: &Report) -> Result<String, VennError> {
        let mut out = String::new();
        let _ = writeln!(out, "=== {} ===", report.title);
        let _ = writeln!(out, "generated_at : {}", report.generated_at.to_rfc3339());
        let _ = writeln!(out, "non-compliant: {}", report.total_records);
        for entry in &report.partitions {
            out.push('\n');
            self.render_partition(&mut out, entry);
        }
        if !report.breakdown.is_empty() {
            let _ = writeln!(out, "\n--- records by commodity ---");
            for share in &report.breakdown {
                let _ = writeln!(
                    out,
                    "{}: count={} share={:.2} unsafe={} sub_standard={} mis_labelled={}",
                    share.commodity,
                    share.records,
                    share.share,
                    share.unsafe_rows,
                    share.sub_standard_rows,
                    share.mis_labelled_rows
                );
            }
        }
        Ok(out)
    }
}
