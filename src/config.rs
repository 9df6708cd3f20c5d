use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration, read from an optional TOML file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MayaConfig {
    /// Conversion settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl MayaConfig {
    /// Loads the configuration from `path`, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_correlation")]
    pub correlation: CorrelationToml,
    #[serde(default = "default_validation")]
    pub validation: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            correlation: default_correlation(),
            validation: default_validation(),
        }
    }
}

/// Correlation given either by name (`"gmt"`) or as an epoch JDN (`584283`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CorrelationToml {
    Epoch(i64),
    Named(String),
}

fn default_correlation() -> CorrelationToml {
    CorrelationToml::Named("gmt".to_string())
}
fn default_validation() -> String {
    "lenient".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_without_file() {
        let cfg = MayaConfig::load(None).unwrap();
        assert_eq!(cfg.calendar.correlation, CorrelationToml::Named("gmt".into()));
        assert_eq!(cfg.calendar.validation, "lenient");
        assert_eq!(cfg.output.format, "text");
    }

    #[test]
    fn empty_file_uses_defaults() {
        let cfg: MayaConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.calendar.validation, "lenient");
        assert_eq!(cfg.output.format, "text");
    }

    #[test]
    fn named_and_numeric_correlation() {
        let cfg: MayaConfig = toml::from_str("[calendar]\ncorrelation = \"lounsbury\"\n").unwrap();
        assert_eq!(
            cfg.calendar.correlation,
            CorrelationToml::Named("lounsbury".into())
        );
        let cfg: MayaConfig = toml::from_str("[calendar]\ncorrelation = 584238\n").unwrap();
        assert_eq!(cfg.calendar.correlation, CorrelationToml::Epoch(584_238));
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<MayaConfig>("[calendar]\nepoch = 1\n").is_err());
        assert!(toml::from_str::<MayaConfig>("[server]\nport = 80\n").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[calendar]\nvalidation = \"strict\"\n\n[output]\nformat = \"json\""
        )
        .unwrap();
        let cfg = MayaConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.calendar.validation, "strict");
        assert_eq!(cfg.output.format, "json");
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = MayaConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
