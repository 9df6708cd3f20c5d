//! Text and JSON rendering of conversion results.

use anyhow::{Context, Result};
use maya_calendar::MayaDate;

/// Output format shared by the `convert` and `batch` commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Multi-line, labelled report for a single conversion.
pub fn render_report(maya: &MayaDate) -> String {
    format!(
        "Date: {}\n\
         LongCount: {}\n\
         Pronounce: {}\n\
         Haab: {}\n\
         Tzolkin: {}\n\
         Lord of Night: {}\n\
         Julian Day Number: {}\n",
        maya.date(),
        maya.long_count(),
        maya.long_count().pronounce(),
        maya.haab(),
        maya.tzolkin(),
        maya.lord_of_night(),
        maya.julian_day_number(),
    )
}

/// One tab-separated line per conversion, for batch output.
pub fn render_line(maya: &MayaDate) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        maya.date(),
        maya.long_count(),
        maya.tzolkin(),
        maya.haab(),
        maya.lord_of_night()
    )
}

/// Pretty-printed JSON for a single conversion.
pub fn render_json(maya: &MayaDate) -> Result<String> {
    serde_json::to_string_pretty(&maya.to_record()).context("failed to serialize conversion")
}

#[cfg(test)]
mod tests {
    use maya_calendar::{ConvertConfig, convert};

    use super::*;

    fn reference() -> MayaDate {
        convert(19, 10, 1991, &ConvertConfig::default()).unwrap()
    }

    #[test]
    fn report_lists_every_field() {
        let report = render_report(&reference());
        assert_eq!(
            report,
            "Date: 19/10/1991\n\
             LongCount: 12.18.18.9.6\n\
             Pronounce: 12 b'ak'tun 18 ka'tun 18 tun 9 uinal 6 k'in\n\
             Haab: 14 Yax\n\
             Tzolkin: 5 Kimi\n\
             Lord of Night: G7\n\
             Julian Day Number: 1864266\n"
        );
    }

    #[test]
    fn line_is_tab_separated() {
        assert_eq!(
            render_line(&reference()),
            "19/10/1991\t12.18.18.9.6\t5 Kimi\t14 Yax\tG7"
        );
    }

    #[test]
    fn json_uses_record_field_names() {
        let json: serde_json::Value = serde_json::from_str(&render_json(&reference()).unwrap()).unwrap();
        assert_eq!(json["longCount"], "12.18.18.9.6");
        assert_eq!(json["julianDayNumber"], 1_864_266);
    }
}
