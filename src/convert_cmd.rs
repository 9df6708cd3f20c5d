//! Convert command: one date from flags to stdout.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use maya_calendar::{Converter, GregorianDate};

use crate::cli::ConvertArgs;
use crate::config::MayaConfig;
use crate::convert;
use crate::output::{self, OutputFormat};

/// Run a single conversion.
pub fn run(args: ConvertArgs, config: &MayaConfig) -> Result<()> {
    let _cmd = info_span!("convert").entered();
    let convert_cfg = convert::build_convert_config(&config.calendar, &args.calendar)?;
    let format = convert::resolve_format(config, args.format.as_deref())?;
    debug!(
        correlation = %convert_cfg.correlation(),
        validation = ?convert_cfg.validation(),
        "resolved configuration"
    );

    let date = GregorianDate::parse_fields(
        args.day.as_deref(),
        args.month.as_deref(),
        args.year.as_deref(),
        convert_cfg.validation(),
    )
    .context("invalid date")?;

    let maya = Converter::new(convert_cfg).convert_date(date);
    match format {
        OutputFormat::Text => print!("{}", output::render_report(&maya)),
        OutputFormat::Json => println!("{}", output::render_json(&maya)?),
    }
    Ok(())
}
