//! Invoke command: answer a JSON request envelope, as a function-call host would.

use std::collections::BTreeMap;
use std::io::Read;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use maya_calendar::{ConversionRecord, ConvertConfig, Converter, GregorianDate};

use crate::cli::InvokeArgs;
use crate::config::MayaConfig;
use crate::convert;

/// Incoming request. Fields may be JSON strings or numbers.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Request {
    pub day: Option<serde_json::Value>,
    pub month: Option<serde_json::Value>,
    pub year: Option<serde_json::Value>,
}

/// Outgoing response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: ResponseBody,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Maya(ConversionRecord),
    Error { error: String },
}

impl Response {
    fn new(status_code: u16, body: ResponseBody) -> Self {
        let headers = BTreeMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]);
        Self {
            status_code,
            headers,
            body,
        }
    }

    fn bad_request(error: impl ToString) -> Self {
        Self::new(
            400,
            ResponseBody::Error {
                error: error.to_string(),
            },
        )
    }
}

/// Renders a request field as text; `null` counts as absent.
fn field_text(value: Option<&serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Handles one parsed request.
pub fn handle(request: &Request, config: &ConvertConfig) -> Response {
    let day = field_text(request.day.as_ref());
    let month = field_text(request.month.as_ref());
    let year = field_text(request.year.as_ref());

    match GregorianDate::parse_fields(
        day.as_deref(),
        month.as_deref(),
        year.as_deref(),
        config.validation(),
    ) {
        Ok(date) => {
            let maya = Converter::new(*config).convert_date(date);
            Response::new(200, ResponseBody::Maya(maya.to_record()))
        }
        Err(e) => {
            warn!(error = %e, "rejected request");
            Response::bad_request(e)
        }
    }
}

/// Handles a raw JSON request body; malformed JSON yields a 400 response.
pub fn handle_json(body: &str, config: &ConvertConfig) -> Response {
    match serde_json::from_str::<Request>(body) {
        Ok(request) => handle(&request, config),
        Err(e) => {
            warn!(error = %e, "malformed request body");
            Response::bad_request(format!("malformed request: {e}"))
        }
    }
}

/// Run the request/response envelope over a file or stdin.
pub fn run(args: InvokeArgs, config: &MayaConfig) -> Result<()> {
    let _cmd = info_span!("invoke").entered();
    let convert_cfg = convert::build_convert_config(&config.calendar, &args.calendar)?;

    let body = match args.input {
        Some(ref path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read request: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read request from stdin")?;
            buf
        }
    };

    let response = handle_json(&body, &convert_cfg);
    info!(status = response.status_code, "request handled");
    let json = serde_json::to_string_pretty(&response).context("failed to serialize response")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_value(response: &Response) -> serde_json::Value {
        serde_json::to_value(response).unwrap()
    }

    #[test]
    fn string_fields() {
        let response = handle_json(
            r#"{"day": "19", "month": "10", "year": "1991"}"#,
            &ConvertConfig::default(),
        );
        let json = to_value(&response);
        assert_eq!(json["statusCode"], 200);
        assert_eq!(json["headers"]["Content-Type"], "application/json");
        assert_eq!(json["body"]["date"], "19/10/1991");
        assert_eq!(json["body"]["longCount"], "12.18.18.9.6");
        assert_eq!(json["body"]["tzolkin"], "5 Kimi");
        assert_eq!(json["body"]["haab"], "14 Yax");
        assert_eq!(json["body"]["lordOfNight"], "G7");
        assert_eq!(json["body"]["julianDayNumber"], 1_864_266);
    }

    #[test]
    fn numeric_fields() {
        let response = handle_json(
            r#"{"day": 21, "month": 12, "year": 2012}"#,
            &ConvertConfig::default(),
        );
        assert_eq!(response.status_code, 200);
        assert_eq!(to_value(&response)["body"]["longCount"], "13.0.0.0.0");
    }

    #[test]
    fn missing_field_is_bad_request() {
        let response = handle_json(r#"{"day": "19", "year": null}"#, &ConvertConfig::default());
        assert_eq!(response.status_code, 400);
        let error = to_value(&response)["body"]["error"]
            .as_str()
            .unwrap()
            .to_string();
        assert!(error.contains("month, year"), "{error}");
    }

    #[test]
    fn non_numeric_is_bad_request() {
        let response = handle_json(
            r#"{"day": "19", "month": true, "year": "1991"}"#,
            &ConvertConfig::default(),
        );
        assert_eq!(response.status_code, 400);
        assert!(
            to_value(&response)["body"]["error"]
                .as_str()
                .unwrap()
                .contains("month")
        );
    }

    #[test]
    fn out_of_range_is_bad_request() {
        let response = handle_json(
            r#"{"day": "1", "month": "1", "year": "4001"}"#,
            &ConvertConfig::default(),
        );
        assert_eq!(response.status_code, 400);
    }

    #[test]
    fn malformed_json_is_bad_request() {
        let response = handle_json("{not json", &ConvertConfig::default());
        assert_eq!(response.status_code, 400);
        assert!(
            to_value(&response)["body"]["error"]
                .as_str()
                .unwrap()
                .starts_with("malformed request")
        );
    }
}
