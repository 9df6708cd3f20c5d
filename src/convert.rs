//! Pure conversion functions: TOML config and CLI strings -> crate API config types.

use anyhow::{Context, Result, bail};

use maya_calendar::{ConvertConfig, Correlation, Validation};

use crate::cli::CalendarArgs;
use crate::config::{CalendarToml, CorrelationToml, MayaConfig};
use crate::output::OutputFormat;

/// Parses a correlation name or epoch JDN into a [`Correlation`].
pub fn parse_correlation(s: &str) -> Result<Correlation> {
    match s.trim().to_lowercase().as_str() {
        "gmt" => Ok(Correlation::GMT),
        "lounsbury" => Ok(Correlation::LOUNSBURY),
        other => other
            .parse::<i64>()
            .map(Correlation::new)
            .with_context(|| format!("unknown correlation: {other:?}")),
    }
}

/// Converts the TOML correlation value into a [`Correlation`].
pub fn build_correlation(c: &CorrelationToml) -> Result<Correlation> {
    match c {
        CorrelationToml::Epoch(jdn) => Ok(Correlation::new(*jdn)),
        CorrelationToml::Named(name) => parse_correlation(name),
    }
}

/// Parses a validation mode name into the corresponding enum variant.
pub fn parse_validation(s: &str) -> Result<Validation> {
    match s.to_lowercase().as_str() {
        "lenient" => Ok(Validation::Lenient),
        "strict" => Ok(Validation::Strict),
        other => bail!("unknown validation mode: {other:?}"),
    }
}

/// Parses an output format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Builds a [`ConvertConfig`] from the `[calendar]` section, with CLI flags
/// taking precedence.
pub fn build_convert_config(calendar: &CalendarToml, args: &CalendarArgs) -> Result<ConvertConfig> {
    let correlation = match args.correlation {
        Some(ref s) => parse_correlation(s)?,
        None => build_correlation(&calendar.correlation)?,
    };
    let validation = if args.strict {
        Validation::Strict
    } else {
        parse_validation(&calendar.validation)?
    };
    Ok(ConvertConfig::new()
        .with_correlation(correlation)
        .with_validation(validation))
}

/// Resolves the output format, with the CLI flag taking precedence.
pub fn resolve_format(config: &MayaConfig, flag: Option<&str>) -> Result<OutputFormat> {
    parse_format(flag.unwrap_or(&config.output.format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_names_and_numbers() {
        assert_eq!(parse_correlation("GMT").unwrap(), Correlation::GMT);
        assert_eq!(parse_correlation("lounsbury").unwrap(), Correlation::LOUNSBURY);
        assert_eq!(parse_correlation(" 584238 ").unwrap(), Correlation::new(584_238));
        assert!(parse_correlation("spinden?").is_err());
    }

    #[test]
    fn validation_names() {
        assert_eq!(parse_validation("Strict").unwrap(), Validation::Strict);
        assert_eq!(parse_validation("lenient").unwrap(), Validation::Lenient);
        assert!(parse_validation("loose").is_err());
    }

    #[test]
    fn format_names() {
        assert_eq!(parse_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_format("text").unwrap(), OutputFormat::Text);
        assert!(parse_format("yaml").is_err());
    }

    #[test]
    fn config_defaults_to_gmt_lenient() {
        let cfg = build_convert_config(&CalendarToml::default(), &CalendarArgs::default()).unwrap();
        assert_eq!(cfg, ConvertConfig::default());
    }

    #[test]
    fn cli_overrides_config() {
        let calendar = CalendarToml {
            correlation: CorrelationToml::Epoch(584_285),
            validation: "lenient".to_string(),
        };
        let args = CalendarArgs {
            correlation: Some("gmt".to_string()),
            strict: true,
        };
        let cfg = build_convert_config(&calendar, &args).unwrap();
        assert_eq!(cfg.correlation(), Correlation::GMT);
        assert_eq!(cfg.validation(), Validation::Strict);
    }

    #[test]
    fn config_used_without_flags() {
        let calendar = CalendarToml {
            correlation: CorrelationToml::Epoch(584_285),
            validation: "strict".to_string(),
        };
        let cfg = build_convert_config(&calendar, &CalendarArgs::default()).unwrap();
        assert_eq!(cfg.correlation(), Correlation::LOUNSBURY);
        assert_eq!(cfg.validation(), Validation::Strict);
    }

    #[test]
    fn format_flag_overrides_config() {
        let config = MayaConfig::default();
        assert_eq!(resolve_format(&config, None).unwrap(), OutputFormat::Text);
        assert_eq!(resolve_format(&config, Some("json")).unwrap(), OutputFormat::Json);
    }
}
