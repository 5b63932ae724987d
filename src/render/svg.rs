//! SVG renderer: one three-circle diagram per partition.
//!
//! Circles sit on an equilateral triangle around the drawing centre. Region
//! counts are placed at fixed offsets from the centre so every count stays
//! inside its own region regardless of the set sizes (diagrams are not
//! area-proportional).

use std::fmt::Write;

use super::Renderer;
use crate::config::RenderOptions;
use crate::constants::report::EMPTY_PARTITION_MESSAGE;
use crate::constants::venn::SET_LABELS;
use crate::errors::VennError;
use crate::report::{PartitionReport, Report};
use crate::utils::escape_xml;

const CIRCLE_COLORS: [&str; 3] = ["#e4572e", "#f3a712", "#2e86ab"];
const CIRCLE_OPACITY: f64 = 0.4;
const RADIUS_FACTOR: f64 = 0.25;
const SPREAD_FACTOR: f64 = 0.6;
// Unit offsets from the centre, in units of the circle spread, for region
// keys 100, 010, 110, 001, 101, 011, 111.
const REGION_OFFSETS: [(f64, f64); 7] = [
    (-1.9, -1.1),
    (1.9, -1.1),
    (0.0, -1.27),
    (0.0, 2.2),
    (-1.1, 0.64),
    (1.1, 0.64),
    (0.0, 0.0),
];

/// SVG diagram renderer.
pub struct SvgRenderer {
    options: RenderOptions,
}

#[derive(Clone, Copy)]
struct Layout {
    cx: f64,
    cy: f64,
    radius: f64,
    spread: f64,
}

impl Layout {
    fn new(options: &RenderOptions) -> Self {
        let width = f64::from(options.width);
        let top = f64::from(options.title_font_size) * 2.0;
        let area = (f64::from(options.height) - top).max(1.0);
        let side = width.min(area);
        let radius = side * RADIUS_FACTOR;
        Self {
            cx: width / 2.0,
            cy: top + area / 2.0,
            radius,
            spread: radius * SPREAD_FACTOR,
        }
    }

    fn circle_centers(&self) -> [(f64, f64); 3] {
        let d = self.spread;
        [
            (self.cx - d, self.cy - d * 0.577),
            (self.cx + d, self.cy - d * 0.577),
            (self.cx, self.cy + d * 1.155),
        ]
    }

    fn region_point(&self, idx: usize) -> (f64, f64) {
        let (dx, dy) = REGION_OFFSETS[idx];
        (self.cx + dx * self.spread, self.cy + dy * self.spread)
    }
}

impl SvgRenderer {
    /// Create a renderer with explicit sizing options.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render one partition as a standalone SVG document.
    pub fn render_partition(&self, entry: &PartitionReport) -> String {
        let opts = &self.options;
        let mut svg = String::with_capacity(2048);
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">",
            w = opts.width,
            h = opts.height
        );
        let _ = writeln!(svg, "<title>{}</title>", escape_xml(&entry.label));
        self.write_diagram(&mut svg, entry);
        svg.push_str("</svg>\n");
        svg
    }

    /// Heading, circles, and counts of one partition in canvas coordinates.
    fn write_diagram(&self, svg: &mut String, entry: &PartitionReport) {
        let opts = &self.options;
        let _ = writeln!(
            svg,
            "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"{}\" font-weight=\"bold\" text-anchor=\"middle\">{}</text>",
            f64::from(opts.width) / 2.0,
            f64::from(opts.title_font_size) * 1.4,
            opts.title_font_size,
            escape_xml(&entry.label)
        );

        let layout = Layout::new(opts);
        if entry.is_empty() {
            let _ = writeln!(
                svg,
                "<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"{}\" text-anchor=\"middle\">{}</text>",
                layout.cx,
                layout.cy,
                opts.font_size,
                escape_xml(EMPTY_PARTITION_MESSAGE)
            );
            return;
        }

        let centers = layout.circle_centers();
        for ((x, y), color) in centers.iter().zip(CIRCLE_COLORS) {
            let _ = writeln!(
                svg,
                "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"{:.1}\" fill=\"{color}\" fill-opacity=\"{CIRCLE_OPACITY}\" stroke=\"#333333\"/>",
                layout.radius
            );
        }

        let sizes = entry.regions.set_sizes();
        let label_gap = f64::from(opts.font_size);
        for (idx, ((x, y), label)) in centers.iter().zip(SET_LABELS).enumerate() {
            let label_y = if idx < 2 {
                y - layout.radius - label_gap / 2.0
            } else {
                y + layout.radius + label_gap * 1.2
            };
            let _ = writeln!(
                svg,
                "<text class=\"set-label\" x=\"{x:.1}\" y=\"{label_y:.1}\" font-size=\"{}\" text-anchor=\"middle\">{} ({})</text>",
                opts.font_size,
                escape_xml(label),
                sizes[idx]
            );
        }

        for (idx, (key, count)) in entry.regions.as_subsets().iter().enumerate() {
            let (x, y) = layout.region_point(idx);
            let _ = writeln!(
                svg,
                "<text class=\"region\" data-region=\"{key}\" x=\"{x:.1}\" y=\"{y:.1}\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\">{count}</text>",
                opts.font_size
            );
        }
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Renderer for SvgRenderer {
    fn name(&self) -> &'static str {
        "svg"
    }

    /// One SVG document with the partition diagrams stacked top to bottom.
    fn render(&self, report: &Report) -> Result<String, VennError> {
        self.options.validate()?;
        let opts = &self.options;
        let total_height = u64::from(opts.height) * report.partitions.len().max(1) as u64;
        let mut out = String::with_capacity(2048 * report.partitions.len().max(1));
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{total_height}\" viewBox=\"0 0 {w} {total_height}\" font-family=\"sans-serif\">",
            w = opts.width
        );
        let _ = writeln!(out, "<title>{}</title>", escape_xml(&report.title));
        for (idx, entry) in report.partitions.iter().enumerate() {
            let _ = writeln!(
                out,
                "<svg class=\"partition\" x=\"0\" y=\"{y}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
                y = u64::from(opts.height) * idx as u64,
                w = opts.width,
                h = opts.height
            );
            let _ = writeln!(out, "<title>{}</title>", escape_xml(&entry.label));
            self.write_diagram(&mut out, entry);
            out.push_str("</svg>\n");
        }
        out.push_str("</svg>\n");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{IdentifierSets, PartitionSelector};
    use crate::venn::VennRegions;
    use std::collections::BTreeSet;

    fn entry(label: &str, unsafe_ids: &[&str], mis_labelled_ids: &[&str]) -> PartitionReport {
        let sets = IdentifierSets {
            unsafe_ids: unsafe_ids.iter().map(|id| id.to_string()).collect(),
            sub_standard_ids: BTreeSet::new(),
            mis_labelled_ids: mis_labelled_ids.iter().map(|id| id.to_string()).collect(),
        };
        let regions = VennRegions::from_sets(&sets);
        PartitionReport {
            selector: PartitionSelector::from_option(Some(label)),
            label: label.to_string(),
            record_count: regions.total(),
            sets,
            regions,
        }
    }

    #[test]
    fn diagram_has_three_circles_and_seven_regions() {
        let svg = SvgRenderer::default().render_partition(&entry("Rice", &["A", "B"], &["B"]));
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches("class=\"region\"").count(), 7);
        assert!(svg.contains("data-region=\"101\""));
        assert!(svg.contains("Unsafe (2)"));
        assert!(svg.contains("Mis-labelled (1)"));
    }

    #[test]
    fn empty_partition_renders_message_instead_of_circles() {
        let svg = SvgRenderer::default().render_partition(&entry("Maize", &[], &[]));
        assert!(svg.contains(EMPTY_PARTITION_MESSAGE));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn labels_are_escaped() {
        let svg = SvgRenderer::default().render_partition(&entry("Salt & <Iodine>", &["A"], &[]));
        assert!(svg.contains("Salt &amp; &lt;Iodine&gt;"));
        assert!(!svg.contains("<Iodine>"));
    }

    #[test]
    fn size_options_drive_canvas() {
        let options = RenderOptions {
            width: 640,
            height: 480,
            ..RenderOptions::default()
        };
        let svg = SvgRenderer::new(options).render_partition(&entry("Rice", &["A"], &[]));
        assert!(svg.contains("width=\"640\" height=\"480\""));
    }

    #[test]
    fn full_report_is_a_single_svg_document() {
        let report = Report {
            title: "Inspections".to_string(),
            generated_at: chrono::Utc::now(),
            total_records: 3,
            breakdown: Vec::new(),
            partitions: vec![
                entry("Overall", &["A", "B"], &["C"]),
                entry("Rice", &["A"], &[]),
                entry("Wheat", &[], &[]),
            ],
        };
        let svg = SvgRenderer::default().render(&report).unwrap();

        assert!(svg.starts_with("<svg xmlns="));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("xmlns=").count(), 1);
        assert_eq!(svg.matches("<svg class=\"partition\"").count(), 3);
        assert_eq!(svg.matches("<svg").count(), svg.matches("</svg>").count());
        assert!(svg.contains("height=\"1200\""));
        assert!(svg.contains("y=\"800\""));
        assert!(!svg.contains("<!--"));
    }
}
