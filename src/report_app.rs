use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, builder::PossibleValuesParser, error::ErrorKind};

use crate::config::{RenderOptions, ReportConfig, ReportScope};
use crate::constants::report::{DEFAULT_FONT_SIZE, DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH};
use crate::errors::VennError;
use crate::render::{available_formats, create_renderer, write_partition_svgs};
use crate::session::Session;
use crate::source::{CsvSource, CsvSourceConfig};

#[derive(Debug, Parser)]
#[command(
    name = "venn_report",
    disable_help_subcommand = true,
    about = "Venn reports of FSSR non-compliance categories",
    long_about = "Drop fully compliant inspection rows, flag Unsafe / Sub-Standard / Mis-labelled records, and report their overlaps overall and per commodity.",
    after_help = "Without --commodity every partition is reported (Overall first, then each commodity). Set RUST_LOG=debug for per-stage record counts."
)]
/// CLI for `venn_report`.
///
/// Common usage:
/// - Full report to stdout: `--input inspections.csv`
/// - One commodity: `--input inspections.csv --commodity Rice`
/// - One SVG file per partition: `--format svg --out-dir diagrams`
struct VennReportCli {
    #[arg(long, short = 'i', value_name = "CSV", help = "Inspection CSV file")]
    input: PathBuf,
    #[arg(
        long,
        value_name = "NAME",
        help = "Commodity to report, or Overall for the whole dataset"
    )]
    commodity: Option<String>,
    #[arg(long, help = "Report every partition even when --commodity is set")]
    all: bool,
    #[arg(
        long,
        default_value = "text",
        value_parser = PossibleValuesParser::new(available_formats().iter().copied()),
        help = "Output format"
    )]
    format: String,
    #[arg(
        long = "out-dir",
        value_name = "DIR",
        help = "Write one SVG file per partition into DIR (svg format only)"
    )]
    out_dir: Option<PathBuf>,
    #[arg(
        long,
        default_value = ",",
        value_parser = parse_delimiter,
        help = "Single-byte field delimiter"
    )]
    delimiter: u8,
    #[arg(long = "trim-headers", help = "Trim whitespace around header names")]
    trim_headers: bool,
    #[arg(long, default_value = DEFAULT_TITLE, help = "Report title")]
    title: String,
    #[arg(
        long,
        default_value_t = DEFAULT_WIDTH,
        value_parser = parse_positive_u32,
        help = "Diagram width in pixels"
    )]
    width: u32,
    #[arg(
        long,
        default_value_t = DEFAULT_HEIGHT,
        value_parser = parse_positive_u32,
        help = "Diagram height in pixels"
    )]
    height: u32,
    #[arg(
        long = "font-size",
        default_value_t = DEFAULT_FONT_SIZE,
        value_parser = parse_positive_u32,
        help = "Font size of labels and counts"
    )]
    font_size: u32,
    #[arg(
        long = "list-commodities",
        help = "Print the selectable partitions and exit"
    )]
    list_commodities: bool,
}

/// Run the `venn_report` CLI, writing stdout output to `out`.
pub fn run_venn_report<I, W>(args_iter: I, out: &mut W) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
    W: Write,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let Some(cli) =
        parse_cli::<VennReportCli, _>(std::iter::once("venn_report".to_string()).chain(args_iter))?
    else {
        return Ok(());
    };

    if cli.out_dir.is_some() && cli.format != "svg" {
        return Err(
            VennError::Configuration("--out-dir requires --format svg".to_string()).into(),
        );
    }

    let source = CsvSource::new(
        CsvSourceConfig::new(&cli.input)
            .with_delimiter(cli.delimiter)
            .with_trim_headers(cli.trim_headers),
    );
    let mut session = Session::new();
    session.upload(&source)?;

    if cli.list_commodities {
        for option in session.commodity_options() {
            writeln!(out, "{option}")?;
        }
        return Ok(());
    }

    let scope = match cli.commodity.as_deref() {
        None => ReportScope::All,
        selection => ReportScope::from_controls(selection, cli.all),
    };
    let config = ReportConfig::default()
        .with_title(&cli.title)
        .with_scope(scope);
    let options = RenderOptions {
        width: cli.width,
        height: cli.height,
        font_size: cli.font_size,
        ..RenderOptions::default()
    };

    let Some(report) = session.view(&config) else {
        return Err("no dataset loaded".into());
    };

    if let Some(dir) = &cli.out_dir {
        for path in write_partition_svgs(dir, &report, options)? {
            writeln!(out, "{}", path.display())?;
        }
        return Ok(());
    }

    let renderer = create_renderer(&cli.format, options).ok_or_else(|| {
        VennError::Configuration(format!(
            "unsupported format '{}', expected one of: {}",
            cli.format,
            available_formats().join(", ")
        ))
    })?;
    let rendered = renderer.render(&report)?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

fn parse_positive_u32(raw: &str) -> Result<u32, VennError> {
    let parsed = raw.parse::<u32>().map_err(|_| {
        VennError::Configuration(format!("Could not parse '{}' as a positive integer", raw))
    })?;
    if parsed == 0 {
        return Err(VennError::Configuration(
            "value must be greater than zero".to_string(),
        ));
    }
    Ok(parsed)
}

fn parse_delimiter(raw: &str) -> Result<u8, VennError> {
    let value = match raw {
        "\\t" | "tab" => "\t",
        other => other,
    };
    match value.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(VennError::Configuration(format!(
            "--delimiter expects a single-byte character, got '{}'",
            raw
        ))),
    }
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_accepts_single_bytes_and_tab_aliases() {
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
        assert!(matches!(
            parse_delimiter(";;"),
            Err(VennError::Configuration(_))
        ));
        assert!(matches!(
            parse_delimiter("§"),
            Err(VennError::Configuration(_))
        ));
    }

    #[test]
    fn positive_u32_rejects_zero_and_garbage() {
        assert_eq!(parse_positive_u32("640").unwrap(), 640);
        assert!(matches!(
            parse_positive_u32("0"),
            Err(VennError::Configuration(_))
        ));
        assert!(matches!(
            parse_positive_u32("wide"),
            Err(VennError::Configuration(_))
        ));
    }

    #[test]
    fn out_dir_without_svg_is_a_configuration_error() {
        let mut out = Vec::new();
        let err = run_venn_report(
            ["--input", "unused.csv", "--out-dir", "diagrams"]
                .into_iter()
                .map(str::to_string),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<VennError>(),
            Some(VennError::Configuration(_))
        ));
    }

    #[test]
    fn unknown_format_is_rejected_by_the_parser() {
        let mut out = Vec::new();
        let result = run_venn_report(
            ["--input", "unused.csv", "--format", "png"]
                .into_iter()
                .map(str::to_string),
            &mut out,
        );
        assert!(result.is_err());
    }

    #[test]
    fn help_exits_cleanly() {
        let mut out = Vec::new();
        run_venn_report(["--help".to_string()].into_iter(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn missing_input_flag_is_an_error() {
        let mut out = Vec::new();
        assert!(run_venn_report(std::iter::empty(), &mut out).is_err());
    }
}
