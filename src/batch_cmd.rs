//! Batch command: convert a file of `D/M/Y` dates in parallel.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, info_span};

use maya_calendar::{
    CalendarError, ConversionRecord, ConvertConfig, Converter, GregorianDate, MayaDate,
};

use crate::cli::BatchArgs;
use crate::config::MayaConfig;
use crate::convert;
use crate::output::{self, OutputFormat};

/// Outcome for one input line.
#[derive(Debug)]
pub struct LineResult {
    /// 1-based line number in the input.
    pub line: usize,
    /// The trimmed input text.
    pub input: String,
    pub result: Result<MayaDate, CalendarError>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonEntry<'a> {
    Maya(ConversionRecord),
    Error {
        line: usize,
        input: &'a str,
        error: String,
    },
}

/// Splits a `D/M/Y` line into raw fields. Absent parts are `None`.
fn split_date(text: &str) -> Result<[Option<&str>; 3], CalendarError> {
    let mut parts = text.split('/');
    let fields = [parts.next(), parts.next(), parts.next()];
    if let Some(extra) = parts.next() {
        return Err(CalendarError::Parse {
            field: "date",
            value: format!("{text} (unexpected {extra:?})"),
        });
    }
    Ok(fields)
}

/// Converts every date line in `contents`, skipping blanks and `#` comments.
///
/// Parsing runs up front; the parsed dates are then converted in parallel.
pub fn convert_lines(contents: &str, config: &ConvertConfig) -> Vec<LineResult> {
    let entries: Vec<(usize, &str)> = contents
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
        .collect();

    let parsed: Vec<Result<GregorianDate, CalendarError>> = entries
        .iter()
        .map(|&(_, text)| {
            let [d, m, y] = split_date(text)?;
            GregorianDate::parse_fields(d, m, y, config.validation())
        })
        .collect();

    let valid: Vec<GregorianDate> = parsed.iter().filter_map(|p| p.as_ref().ok().copied()).collect();
    let mut converted = Converter::new(*config).convert_dates(&valid).into_iter();

    entries
        .into_iter()
        .zip(parsed)
        .map(|((line, text), p)| LineResult {
            line,
            input: text.to_string(),
            result: p.map(|_| converted.next().expect("one conversion per parsed date")),
        })
        .collect()
}

fn render_text(results: &[LineResult]) -> String {
    let mut out = String::new();
    for r in results {
        match &r.result {
            Ok(maya) => out.push_str(&output::render_line(maya)),
            Err(e) => out.push_str(&format!("line {}: {}: error: {e}", r.line, r.input)),
        }
        out.push('\n');
    }
    out
}

fn render_json(results: &[LineResult]) -> Result<String> {
    let entries: Vec<JsonEntry<'_>> = results
        .iter()
        .map(|r| match &r.result {
            Ok(maya) => JsonEntry::Maya(maya.to_record()),
            Err(e) => JsonEntry::Error {
                line: r.line,
                input: &r.input,
                error: e.to_string(),
            },
        })
        .collect();
    serde_json::to_string_pretty(&entries).context("failed to serialize batch results")
}

/// Run the batch conversion.
pub fn run(args: BatchArgs, config: &MayaConfig) -> Result<()> {
    let _cmd = info_span!("batch").entered();
    let convert_cfg = convert::build_convert_config(&config.calendar, &args.calendar)?;
    let format = convert::resolve_format(config, args.format.as_deref())?;

    info!(path = %args.input.display(), "reading dates");
    let contents = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input: {}", args.input.display()))?;

    let results = convert_lines(&contents, &convert_cfg);
    let n_failed = results.iter().filter(|r| r.result.is_err()).count();
    info!(n_dates = results.len(), n_failed, "batch converted");

    let rendered = match format {
        OutputFormat::Text => render_text(&results),
        OutputFormat::Json => render_json(&results)? + "\n",
    };
    match args.output {
        Some(ref path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "results written");
        }
        None => print!("{rendered}"),
    }

    if n_failed > 0 {
        bail!("{n_failed} of {} dates failed to convert", results.len());
    }
    Ok(())
}
